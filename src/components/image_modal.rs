//! Enlarged view of a gallery memory.

use birthday_ui::CloseButton;
use dioxus::prelude::*;

use crate::context::{use_page_config, use_page_state};

/// Clicking the backdrop or the close button dismisses; clicks on the
/// picture itself are swallowed.
#[component]
pub fn ImageModal() -> Element {
    let mut state = use_page_state();
    let config = use_page_config();
    let selected = state.read().selected_memory();

    let Some(memory) = selected.and_then(|index| config.content.memories.get(index)) else {
        return rsx! {};
    };
    let position = if memory.anchor_bottom { "object-bottom" } else { "object-center" };

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| state.write().close_memory(),
            div {
                class: "modal-panel",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                CloseButton {
                    class: "modal-close".to_string(),
                    onclick: move |_| state.write().close_memory(),
                }
                img {
                    class: "modal-image {position}",
                    src: "{memory.src}",
                    alt: "{memory.alt}",
                }
                if !memory.caption.is_empty() {
                    div { class: "modal-caption",
                        p { "{memory.caption}" }
                    }
                }
            }
        }
    }
}
