//! Mobile Navigation Component
//!
//! Full-screen overlay listing the sections, opened from the header's
//! hamburger on narrow windows.

use birthday_core::Section;
use birthday_ui::CloseButton;
use dioxus::prelude::*;

use crate::context::{navigate_to, use_page_state};

#[component]
pub fn MobileMenu() -> Element {
    let mut state = use_page_state();
    let (open, active) = {
        let page = state.read();
        (page.menu_open(), page.active_section())
    };

    if !open {
        return rsx! {};
    }

    rsx! {
        div { class: "mobile-menu",
            nav { class: "mobile-menu__panel",
                for (index, section) in Section::ALL.into_iter().enumerate() {
                    button {
                        key: "{section.as_str()}",
                        class: if section == active { "mobile-menu__item active" } else { "mobile-menu__item" },
                        style: format!("animation-delay: {}ms", index * 100),
                        r#type: "button",
                        // go_to closes the menu
                        onclick: move |_| navigate_to(state, section),
                        "{section.label()}"
                    }
                }
                CloseButton {
                    class: "mobile-menu__close".to_string(),
                    onclick: move |_| state.write().close_menu(),
                }
            }
        }
    }
}
