//! Audio toggle behaviour against a scripted sink.

use birthday_core::playback::{self, AudioSink};
use birthday_core::{Playback, PlaybackCommand, PlaybackError, PlaybackState};

/// Sink that models a host autoplay policy.
#[derive(Default)]
struct ScriptedSink {
    autoplay_allowed: bool,
    user_gesture: bool,
    playing: bool,
    released: bool,
}

impl AudioSink for ScriptedSink {
    async fn play(&mut self) -> Result<(), PlaybackError> {
        if self.released {
            return Err(PlaybackError::Released);
        }
        if !self.autoplay_allowed && !self.user_gesture {
            return Err(PlaybackError::Blocked("NotAllowedError".to_string()));
        }
        self.playing = true;
        Ok(())
    }

    async fn pause(&mut self) {
        self.playing = false;
    }
}

impl ScriptedSink {
    /// Unload the source, as the page does when it is dropped.
    fn release(&mut self) {
        self.playing = false;
        self.released = true;
    }
}

async fn toggle(state: &mut Playback, sink: &mut ScriptedSink) -> PlaybackState {
    let command = state.next_command();
    let outcome = playback::execute(sink, command).await;
    state.record(command, outcome)
}

#[tokio::test]
async fn test_autoplay_success_shows_playing() {
    let mut sink = ScriptedSink {
        autoplay_allowed: true,
        ..Default::default()
    };
    let mut state = Playback::new();

    let outcome = playback::execute(&mut sink, PlaybackCommand::Play).await;
    assert_eq!(state.record_autoplay(outcome), PlaybackState::Playing);
    assert!(sink.playing);

    // Toggle stops it
    assert_eq!(toggle(&mut state, &mut sink).await, PlaybackState::Paused);
    assert!(!sink.playing);
}

#[tokio::test]
async fn test_blocked_autoplay_falls_back_to_manual_start() {
    let mut sink = ScriptedSink::default();
    let mut state = Playback::new();

    let outcome = playback::execute(&mut sink, PlaybackCommand::Play).await;
    assert!(matches!(outcome, Err(PlaybackError::Blocked(_))));
    assert_eq!(state.record_autoplay(outcome), PlaybackState::Paused);
    assert_eq!(state.next_command(), PlaybackCommand::Play);

    // The click is a user gesture
    sink.user_gesture = true;
    assert_eq!(toggle(&mut state, &mut sink).await, PlaybackState::Playing);
    assert!(sink.playing);

    assert_eq!(toggle(&mut state, &mut sink).await, PlaybackState::Paused);
    assert!(!sink.playing);
}

#[tokio::test]
async fn test_indicator_tracks_sink_through_many_toggles() {
    let mut sink = ScriptedSink {
        user_gesture: true,
        ..Default::default()
    };
    let mut state = Playback::new();

    for _ in 0..7 {
        toggle(&mut state, &mut sink).await;
        assert_eq!(state.is_playing(), sink.playing);
    }
}

#[tokio::test]
async fn test_teardown_releases_sink() {
    let mut sink = ScriptedSink {
        autoplay_allowed: true,
        ..Default::default()
    };
    let mut state = Playback::new();
    let outcome = playback::execute(&mut sink, PlaybackCommand::Play).await;
    state.record_autoplay(outcome);

    sink.release();
    state.release();
    assert!(!sink.playing);
    assert!(!state.is_playing());

    // A late toggle after teardown does nothing
    assert_eq!(toggle(&mut state, &mut sink).await, PlaybackState::Paused);
    assert!(!sink.playing);
}
