//! Greeting hero.

use birthday_core::Section;
use birthday_ui::{Button, ButtonVariant, Icon, IconKind};
use dioxus::prelude::*;

use crate::components::PageSection;
use crate::context::{navigate_to, use_page_config, use_page_state};

#[component]
pub fn HeroSection() -> Element {
    let state = use_page_state();
    let config = use_page_config();
    let content = &config.content;

    rsx! {
        PageSection { section: Section::Greeting, class: "hero".to_string(),
            div { class: "hero__glow" }
            div { class: "hero__content",
                div { class: "hero__sparkles",
                    Icon { kind: IconKind::Sparkles, size: 120 }
                }
                h1 { class: "hero__title",
                    span { class: "gradient-rose", "Happy Birthday," }
                    br {}
                    span { class: "gradient-lilac hero__recipient", "{content.recipient}" }
                }
                p { class: "hero__tagline", "{content.tagline}" }
                div { class: "hero__image",
                    img { src: "{content.hero_image}", alt: "Happy Birthday" }
                    div { class: "hero__image-tint" }
                }
                div { class: "hero__cta",
                    Button {
                        variant: ButtonVariant::Glow,
                        onclick: move |_| navigate_to(state, Section::Gallery),
                        "{content.call_to_action}"
                    }
                }
            }
            div { class: "hero__scroll-hint",
                Icon { kind: IconKind::ChevronDown, size: 30 }
            }
        }
    }
}
