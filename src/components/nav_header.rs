//! Navigation Header Component
//!
//! Desktop: brand title and one link per section, the active one underlined
//! Mobile: brand title and a hamburger opening [`MobileMenu`](super::MobileMenu)

use birthday_core::Section;
use birthday_ui::{Icon, IconKind};
use dioxus::prelude::*;

use crate::context::{navigate_to, use_page_config, use_page_state};

#[component]
pub fn NavHeader() -> Element {
    let mut state = use_page_state();
    let config = use_page_config();
    let active = state.read().active_section();

    rsx! {
        header { class: "nav-header",
            div { class: "nav-header__inner",
                div { class: "nav-brand gradient-rose", "{config.content.title}" }

                nav { class: "nav-links",
                    for section in Section::ALL {
                        button {
                            key: "{section.as_str()}",
                            class: if section == active { "nav-link active" } else { "nav-link" },
                            r#type: "button",
                            onclick: move |_| navigate_to(state, section),
                            span { "{section.label()}" }
                            if section == active {
                                span { class: "nav-link__underline" }
                            }
                        }
                    }
                }

                button {
                    class: "nav-hamburger",
                    r#type: "button",
                    "aria-label": "Open menu",
                    onclick: move |_| state.write().open_menu(),
                    Icon { kind: IconKind::Menu, size: 24 }
                }
            }
        }
    }
}
