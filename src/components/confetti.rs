//! Celebration overlay.

use birthday_core::confetti;
use dioxus::prelude::*;

use crate::context::{use_page_config, use_page_state};

/// Full-screen confetti while the celebration is visible.
///
/// The burst is keyed on the trigger generation, so "Celebrate Again"
/// remounts it and the pieces fall again from the top.
#[component]
pub fn CelebrationOverlay() -> Element {
    let state = use_page_state();
    let config = use_page_config();
    let (visible, burst) = {
        let page = state.read();
        (page.celebration.is_visible(), page.celebration.burst())
    };

    if !visible {
        return rsx! {};
    }

    rsx! {
        div { class: "confetti-overlay", "aria-hidden": "true",
            ConfettiBurst { key: "{burst}", count: config.celebration.particles }
        }
    }
}

#[component]
pub fn ConfettiBurst(count: usize) -> Element {
    let particles = use_hook(|| confetti::generate(count, &mut rand::rng()));

    rsx! {
        for (index, particle) in particles.iter().enumerate() {
            span {
                key: "{index}",
                class: "confetti-piece",
                style: "{particle.style()}",
            }
        }
    }
}
