use birthday_core::Section;
use birthday_ui::{HeadingTone, Icon, IconKind, SectionHeading};
use dioxus::prelude::*;

use crate::components::PageSection;
use crate::context::use_page_config;

/// The birthday letter. First and last paragraphs are set in italics and
/// wrapped in quotes.
#[component]
pub fn MessageSection() -> Element {
    let config = use_page_config();
    let heading = config.content.headings.message.clone();
    let letter = &config.content.letter;
    let last = letter.paragraphs.len().saturating_sub(1);
    let lines: Vec<(String, bool)> = letter
        .paragraphs
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let edge = index == 0 || index == last;
            (quoted(line, index == 0, index == last), edge)
        })
        .collect();

    rsx! {
        PageSection { section: Section::Message, class: "message".to_string(),
            div { class: "container narrow",
                SectionHeading {
                    icon: IconKind::MessageCircle,
                    title: heading.title,
                    subtitle: heading.subtitle,
                    tone: HeadingTone::Lilac,
                }
                div { class: "card-frame",
                    div { class: "card letter",
                        div { class: "letter__bubble",
                            Icon { kind: IconKind::MessageCircle, size: 40 }
                        }
                        for (index, (line, edge)) in lines.into_iter().enumerate() {
                            p {
                                key: "{index}",
                                class: if edge { "letter__line italic" } else { "letter__line" },
                                "{line}"
                            }
                        }
                        p { class: "letter__signature gradient-rose", "{letter.signature}" }
                        div { class: "letter__heart",
                            Icon { kind: IconKind::Heart, size: 50 }
                        }
                    }
                }
            }
        }
    }
}

fn quoted(line: &str, open: bool, close: bool) -> String {
    format!(
        "{}{}{}",
        if open { "\"" } else { "" },
        line,
        if close { "\"" } else { "" }
    )
}
