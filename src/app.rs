use std::rc::Rc;

use birthday_core::{AudioSink, PageState, VisibilitySource};
use dioxus::prelude::*;
use futures::StreamExt;

use crate::bridge::audio::{self, AudioWatch, WebAudio, AUDIO_ELEMENT_ID};
use crate::bridge::visibility::{self, DomVisibility, VisibilityCommand, VisibilityEvent};
use crate::components::{AudioToggle, CelebrationOverlay, ImageModal, MobileMenu, NavHeader};
use crate::context::{celebrate, get_page_config, LivePageState};
use crate::pages::BirthdayPage;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the page state and config, the visibility coroutine that feeds the
/// navigator, and the audio element. Everything below reads them from
/// context.
#[component]
pub fn App() -> Element {
    let config = use_hook(|| Rc::new(get_page_config()));
    let memory_count = config.content.memories.len();
    let duration = config.celebration_duration();

    let mut state: Signal<LivePageState> =
        use_signal(move || PageState::new(memory_count, duration));

    use_context_provider(|| config.clone());
    use_context_provider(|| state);

    // Visibility observer: sections send `Observe` when they mount, jumps
    // send `Jump`; the observer answers with threshold crossings and settle
    // notifications.
    let threshold = config.navigation.threshold;
    let settle = config.settle_delay();
    let observer = use_coroutine(move |mut rx: UnboundedReceiver<VisibilityCommand>| async move {
        let mut source = DomVisibility::connect(threshold, settle);

        loop {
            tokio::select! {
                command = rx.next() => match command {
                    Some(VisibilityCommand::Observe(section)) => {
                        if let Err(e) = source.subscribe(section) {
                            tracing::warn!(%section, error = %e, "Failed to observe section");
                        }
                    }
                    Some(VisibilityCommand::Jump) => {
                        if let Err(e) = source.expect_settle() {
                            tracing::warn!(error = %e, "Failed to arm settle for jump");
                        }
                    }
                    Some(VisibilityCommand::Disconnect) | None => {
                        source.unsubscribe_all();
                        break;
                    }
                },
                event = source.next_event() => match event {
                    Ok(VisibilityEvent::Batch(batch)) => {
                        state.write().navigator.observe(&batch);
                    }
                    Ok(VisibilityEvent::Settled) => {
                        state.write().navigator.settle();
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Visibility observer stopped");
                        break;
                    }
                },
            }
        }
        tracing::debug!("Visibility coroutine finished");
    });

    // Load: try the music, start the celebration, follow the audio element
    let on_load = config.clone();
    use_effect(move || {
        if on_load.audio.autoplay {
            spawn(async move {
                let outcome = WebAudio.play().await;
                state.write().playback.record_autoplay(outcome);
            });
        }
        if on_load.celebration.on_load {
            celebrate(state);
        }
        spawn(async move {
            let mut watch = AudioWatch::start();
            while let Some(playing) = watch.next().await {
                state.write().playback.sync_from_host(playing);
            }
        });
    });

    use_drop(move || {
        observer.send(VisibilityCommand::Disconnect);
        visibility::teardown();
        audio::release_now();
        if let Ok(mut page) = state.try_write() {
            page.celebration.teardown();
            page.playback.release();
        }
        tracing::debug!("Page torn down");
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "page",
            audio {
                id: AUDIO_ELEMENT_ID,
                src: "{config.audio.src}",
                r#loop: config.audio.looped,
                preload: "auto",
            }
            CelebrationOverlay {}
            MobileMenu {}
            NavHeader {}
            AudioToggle {}
            BirthdayPage {}
            ImageModal {}
        }
    }
}
