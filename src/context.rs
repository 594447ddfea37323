//! Page state context for the birthday page.
//!
//! The [`App`](crate::app::App) component owns one `Signal<LivePageState>` and
//! the loaded [`PageConfig`]; every component reaches them through the hooks
//! below instead of keeping flags of its own.
//!
//! ## Usage
//!
//! ```ignore
//! let state = use_page_state();
//! let active = state.read().active_section();
//!
//! // Jump somewhere
//! navigate_to(state, Section::Gallery);
//! ```

use std::rc::Rc;

use birthday_core::{PageConfig, PageState, Section, TimerHandle};
use dioxus::prelude::*;

use crate::bridge::visibility::VisibilityCommand;

/// Region handle for a mounted section element.
pub type PageRegion = Rc<MountedData>;

/// Dioxus task used as the celebration dismissal timer.
pub struct TaskTimer(Task);

impl TimerHandle for TaskTimer {
    fn cancel(self) {
        self.0.cancel();
    }
}

/// Page state as held by the running app.
pub type LivePageState = PageState<PageRegion, TaskTimer>;

/// Get the config loaded at startup.
pub fn get_page_config() -> PageConfig {
    crate::get_page_config()
}

/// Hook to access the page state from context.
pub fn use_page_state() -> Signal<LivePageState> {
    use_context::<Signal<LivePageState>>()
}

/// Hook to access the page config from context.
pub fn use_page_config() -> Rc<PageConfig> {
    use_context::<Rc<PageConfig>>()
}

/// Highlight `section` now and smooth-scroll its region to the top.
///
/// The visibility observer is told about the jump so a settle follows it
/// even when the region is already in place. A region that has gone stale
/// fails to scroll; that is logged and ignored.
pub fn navigate_to(mut state: Signal<LivePageState>, section: Section) {
    let region = state.write().go_to(section);
    if let Some(region) = region {
        match try_consume_context::<Coroutine<VisibilityCommand>>() {
            Some(observer) => observer.send(VisibilityCommand::Jump),
            None => tracing::debug!(%section, "No visibility observer for jump"),
        }
        spawn(async move {
            if let Err(e) = region.scroll_to(ScrollBehavior::Smooth).await {
                tracing::debug!(%section, error = ?e, "Section region could not scroll");
            }
        });
    }
}

/// Show the confetti overlay and (re)arm its dismissal timer.
pub fn celebrate(mut state: Signal<LivePageState>) {
    let mut timer_state = state;
    state.write().celebration.trigger(|ticket, duration| {
        TaskTimer(spawn(async move {
            tokio::time::sleep(duration).await;
            timer_state.write().celebration.expire(ticket);
        }))
    });
}
