//! Wish cards and the "Celebrate Again" button.

use birthday_core::Section;
use birthday_ui::{Button, ButtonVariant, HeadingTone, Icon, IconKind, SectionHeading};
use dioxus::prelude::*;

use crate::components::PageSection;
use crate::context::{celebrate, navigate_to, use_page_config, use_page_state};

#[component]
pub fn WishesSection() -> Element {
    let state = use_page_state();
    let config = use_page_config();
    let heading = config.content.headings.wishes.clone();

    let celebrate_again = move |_| {
        celebrate(state);
        navigate_to(state, Section::Greeting);
    };

    rsx! {
        PageSection { section: Section::Wishes, class: "wishes".to_string(),
            div { class: "container",
                SectionHeading {
                    icon: IconKind::Star,
                    title: heading.title,
                    subtitle: heading.subtitle,
                    tone: HeadingTone::Lilac,
                }
                div { class: "wishes__grid",
                    for (index, wish) in config.content.wishes.iter().enumerate() {
                        div {
                            key: "{index}",
                            class: "wish-card",
                            style: format!("animation-delay: {}ms", index * 150),
                            div { class: "wish-card__glow" }
                            div { class: "wish-card__body",
                                div { class: "wish-card__icon",
                                    Icon { kind: IconKind::from(wish.icon), size: 24 }
                                }
                                div {
                                    h3 { "{wish.title}" }
                                    p { class: "muted", "{wish.text}" }
                                }
                            }
                        }
                    }
                }
                div { class: "wishes__again",
                    Button {
                        variant: ButtonVariant::Glow,
                        class: "btn-large".to_string(),
                        onclick: celebrate_again,
                        "{config.content.celebrate_label}"
                    }
                }
            }
        }
    }
}
