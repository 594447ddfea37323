//! Celebratory confetti overlay with a re-armable auto-dismiss timer.
//!
//! The overlay owns at most one pending timer. Re-triggering cancels the old
//! handle before scheduling a new one, and every timer carries a
//! [`CelebrationTicket`] so an expiry that still slips through is ignored.

use std::time::Duration;

/// Default time the overlay stays up.
pub const DEFAULT_CELEBRATION: Duration = Duration::from_secs(10);

/// Handle to a scheduled dismissal that can be cancelled.
pub trait TimerHandle {
    fn cancel(self);
}

impl TimerHandle for tokio::task::JoinHandle<()> {
    fn cancel(self) {
        self.abort();
    }
}

/// Identifies the trigger a timer was scheduled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CelebrationTicket(u64);

#[derive(Debug)]
pub struct Celebration<H: TimerHandle> {
    visible: bool,
    generation: u64,
    pending: Option<H>,
    duration: Duration,
}

impl<H: TimerHandle> Default for Celebration<H> {
    fn default() -> Self {
        Self::new(DEFAULT_CELEBRATION)
    }
}

impl<H: TimerHandle> Celebration<H> {
    pub fn new(duration: Duration) -> Self {
        Self {
            visible: false,
            generation: 0,
            pending: None,
            duration,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn has_pending_timer(&self) -> bool {
        self.pending.is_some()
    }

    /// Changes on every trigger; renderers key the particle burst on it so
    /// a re-trigger restarts the animation.
    pub fn burst(&self) -> u64 {
        self.generation
    }

    /// Show the overlay and (re)arm its dismissal.
    ///
    /// `schedule` must arrange for [`expire`](Self::expire) to be called with
    /// the given ticket after the given duration.
    pub fn trigger<F>(&mut self, schedule: F) -> CelebrationTicket
    where
        F: FnOnce(CelebrationTicket, Duration) -> H,
    {
        if let Some(previous) = self.pending.take() {
            tracing::debug!("Cancelling pending celebration dismissal");
            previous.cancel();
        }

        self.generation += 1;
        let ticket = CelebrationTicket(self.generation);
        self.visible = true;
        self.pending = Some(schedule(ticket, self.duration));
        tracing::info!(seconds = self.duration.as_secs_f64(), "Celebration started");
        ticket
    }

    /// Dismiss the overlay if `ticket` belongs to the latest trigger.
    pub fn expire(&mut self, ticket: CelebrationTicket) -> bool {
        if ticket.0 != self.generation {
            tracing::debug!("Ignoring stale celebration timer");
            return false;
        }
        self.pending = None;
        self.visible = false;
        tracing::debug!("Celebration dismissed");
        true
    }

    /// Cancel any pending dismissal and hide the overlay.
    pub fn teardown(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
        self.generation += 1;
        self.visible = false;
    }
}
