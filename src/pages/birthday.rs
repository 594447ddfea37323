use dioxus::prelude::*;

use crate::components::sections::{
    GallerySection, HeroSection, MessageSection, SpecialDateSection, WishesSection,
};
use crate::context::use_page_config;

/// The scrolling page: sections in document order, then the footer.
#[component]
pub fn BirthdayPage() -> Element {
    let config = use_page_config();

    rsx! {
        main { class: "page-main",
            HeroSection {}
            SpecialDateSection {}
            GallerySection {}
            MessageSection {}
            WishesSection {}
        }
        footer { class: "page-footer",
            p { "{config.content.footer}" }
        }
    }
}
