//! Memory gallery. Clicking a card opens it in the image modal.

use birthday_core::Section;
use birthday_ui::{IconKind, SectionHeading};
use dioxus::prelude::*;

use crate::components::PageSection;
use crate::context::{use_page_config, use_page_state};

#[component]
pub fn GallerySection() -> Element {
    let mut state = use_page_state();
    let config = use_page_config();
    let heading = config.content.headings.gallery.clone();

    rsx! {
        PageSection { section: Section::Gallery, class: "gallery".to_string(),
            div { class: "container",
                SectionHeading {
                    icon: IconKind::Camera,
                    title: heading.title,
                    subtitle: heading.subtitle,
                }
                div { class: "gallery__grid",
                    for (index, memory) in config.content.memories.iter().enumerate() {
                        div {
                            key: "{index}",
                            class: "memory-card",
                            style: format!("animation-delay: {}ms", index * 100),
                            onclick: move |_| state.write().open_memory(index),
                            div { class: "memory-card__frame",
                                img {
                                    class: if memory.anchor_bottom { "object-bottom" } else { "object-center" },
                                    src: "{memory.src}",
                                    alt: "{memory.alt}",
                                }
                                div { class: "memory-card__shade" }
                                p { class: "memory-card__caption", "{memory.caption}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
