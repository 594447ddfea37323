//! Heading block shown above each content section.

use dioxus::prelude::*;

use crate::components::icon::{Icon, IconKind};

/// Gradient color scheme of a heading title.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum HeadingTone {
    /// Pink to purple
    #[default]
    Rose,
    /// Purple to blue
    Lilac,
}

impl HeadingTone {
    pub fn class(&self) -> &'static str {
        match self {
            HeadingTone::Rose => "gradient-rose",
            HeadingTone::Lilac => "gradient-lilac",
        }
    }
}

/// Icon badge, gradient title and muted subtitle.
#[component]
pub fn SectionHeading(
    icon: IconKind,
    title: String,
    subtitle: String,
    #[props(default)] tone: HeadingTone,
) -> Element {
    let tone_class = tone.class();

    rsx! {
        div { class: "section-heading",
            div { class: "section-heading__icon",
                Icon { kind: icon, size: 32 }
            }
            h2 { class: "section-heading__title {tone_class}", "{title}" }
            p { class: "section-heading__subtitle", "{subtitle}" }
        }
    }
}
