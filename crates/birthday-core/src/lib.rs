//! Birthday Page Core Library
//!
//! UI-independent state for a single animated greeting page.
//!
//! ## Overview
//!
//! The page is a vertical stack of four sections (greeting, gallery, message,
//! wishes). The [`SectionNavigator`] keeps exactly one of them "active" and
//! stays consistent across two update paths:
//!
//! - **Explicit**: a nav click calls [`PageState::go_to`], which highlights the
//!   destination immediately and hands back the region to scroll to.
//! - **Passive**: a [`VisibilitySource`] reports threshold crossings as the
//!   viewport moves, and the navigator follows them.
//!
//! Everything else the page needs (audio playback, the confetti overlay, the
//! image modal, the mobile menu) lives on the same [`PageState`] object.
//!
//! ## Quick Start
//!
//! ```
//! use birthday_core::{PageState, Section};
//!
//! let mut state: PageState<&str, tokio::task::JoinHandle<()>> = PageState::default();
//! state.navigator.register(Section::Gallery, Some("gallery-region"));
//!
//! assert_eq!(state.go_to(Section::Gallery), Some("gallery-region"));
//! assert_eq!(state.navigator.active(), Section::Gallery);
//! ```

pub mod calendar;
pub mod celebration;
pub mod config;
pub mod confetti;
pub mod content;
pub mod error;
pub mod logging;
pub mod navigator;
pub mod playback;
pub mod section;
pub mod state;
pub mod visibility;

// Re-exports
pub use calendar::{MonthGrid, SpecialDate};
pub use celebration::{Celebration, CelebrationTicket, TimerHandle};
pub use config::PageConfig;
pub use content::{Memory, PageContent, Wish, WishIcon};
pub use error::{PageError, PageResult, PlaybackError};
pub use navigator::SectionNavigator;
pub use playback::{AudioSink, Playback, PlaybackCommand, PlaybackState};
pub use section::Section;
pub use state::PageState;
pub use visibility::{
    RegionBounds, RegionSample, SimulatedViewport, ThresholdTracker, VisibilityBatch,
    VisibilityEntry, VisibilitySource, DEFAULT_THRESHOLD,
};
