//! Floating play/pause button for the background music.

use birthday_core::playback;
use birthday_ui::{Button, ButtonVariant, Icon, IconKind};
use dioxus::prelude::*;

use crate::bridge::audio::WebAudio;
use crate::context::use_page_state;

/// Shows what the audio element is doing; clicking asks it to do the
/// opposite and records whatever actually happened.
#[component]
pub fn AudioToggle() -> Element {
    let mut state = use_page_state();
    let playing = state.read().playback.is_playing();

    let toggle = move |_| {
        let command = state.read().playback.next_command();
        spawn(async move {
            let outcome = playback::execute(&mut WebAudio, command).await;
            state.write().playback.record(command, outcome);
        });
    };

    rsx! {
        Button {
            variant: ButtonVariant::Floating,
            class: "audio-toggle".to_string(),
            aria_label: if playing { "Pause music".to_string() } else { "Play music".to_string() },
            onclick: toggle,
            if playing {
                Icon { kind: IconKind::Pause, size: 24 }
            } else {
                Icon { kind: IconKind::Play, size: 24 }
            }
        }
    }
}
