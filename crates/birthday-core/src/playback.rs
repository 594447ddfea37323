//! Background audio playback.
//!
//! [`Playback`] is the indicator state the toggle button renders. It only
//! changes to `Playing` when a sink actually started, so the indicator always
//! reflects what the host did rather than what was requested.
//!
//! Commands are executed against an [`AudioSink`] outside of the state (the
//! desktop app awaits the webview between deciding and recording):
//!
//! ```ignore
//! let command = state.playback.next_command();
//! let outcome = playback::execute(&mut sink, command).await;
//! state.playback.record(command, outcome);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::PlaybackError;

/// Host-side audio element.
///
/// Teardown is not part of the trait: hosts unload their source from a
/// synchronous drop handler and then call [`Playback::release`].
#[allow(async_fn_in_trait)]
pub trait AudioSink {
    /// Start playback. Hosts may refuse (autoplay policy).
    async fn play(&mut self) -> Result<(), PlaybackError>;

    async fn pause(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    Playing,
    #[default]
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackCommand {
    Play,
    Pause,
}

/// Playback indicator state.
#[derive(Debug, Clone, Default)]
pub struct Playback {
    state: PlaybackState,
    released: bool,
}

impl Playback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// What the toggle would do right now.
    pub fn next_command(&self) -> PlaybackCommand {
        match self.state {
            PlaybackState::Playing => PlaybackCommand::Pause,
            PlaybackState::Paused => PlaybackCommand::Play,
        }
    }

    /// Record the outcome of executing `command`.
    pub fn record(
        &mut self,
        command: PlaybackCommand,
        outcome: Result<(), PlaybackError>,
    ) -> PlaybackState {
        if self.released {
            return self.state;
        }

        self.state = match (command, outcome) {
            (PlaybackCommand::Play, Ok(())) => PlaybackState::Playing,
            (PlaybackCommand::Play, Err(e)) => {
                tracing::warn!(error = %e, "Audio playback did not start");
                PlaybackState::Paused
            }
            (PlaybackCommand::Pause, _) => PlaybackState::Paused,
        };
        self.state
    }

    /// Record the result of the automatic start on page load.
    ///
    /// A refusal is expected under most autoplay policies and leaves the
    /// indicator paused for a manual start.
    pub fn record_autoplay(&mut self, outcome: Result<(), PlaybackError>) -> PlaybackState {
        match outcome {
            Ok(()) => {
                tracing::info!("Background audio autoplay started");
                self.record(PlaybackCommand::Play, Ok(()))
            }
            Err(e) => {
                tracing::info!(reason = %e, "Autoplay prevented, waiting for manual start");
                if !self.released {
                    self.state = PlaybackState::Paused;
                }
                self.state
            }
        }
    }

    /// Follow play/pause changes the host made on its own.
    pub fn sync_from_host(&mut self, playing: bool) {
        if self.released {
            return;
        }
        let observed = if playing {
            PlaybackState::Playing
        } else {
            PlaybackState::Paused
        };
        if observed != self.state {
            tracing::debug!(?observed, "Playback state changed by host");
            self.state = observed;
        }
    }

    /// Mark the sink released. Later outcomes are ignored.
    pub fn release(&mut self) {
        self.released = true;
        self.state = PlaybackState::Paused;
    }
}

/// Execute one command against a sink.
pub async fn execute<S: AudioSink>(
    sink: &mut S,
    command: PlaybackCommand,
) -> Result<(), PlaybackError> {
    match command {
        PlaybackCommand::Play => sink.play().await,
        PlaybackCommand::Pause => {
            sink.pause().await;
            Ok(())
        }
    }
}
