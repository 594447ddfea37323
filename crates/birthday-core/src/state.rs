//! Centrally owned page state.
//!
//! One [`PageState`] holds every mutable UI flag: the active section, the
//! mobile menu, the memory shown in the modal, audio playback and the
//! celebration overlay. The desktop app keeps it in a single signal and
//! passes it down to presentation components.

use std::time::Duration;

use crate::celebration::{Celebration, TimerHandle};
use crate::navigator::SectionNavigator;
use crate::playback::Playback;
use crate::section::Section;

#[derive(Debug)]
pub struct PageState<R, H: TimerHandle> {
    pub navigator: SectionNavigator<R>,
    pub playback: Playback,
    pub celebration: Celebration<H>,
    menu_open: bool,
    selected_memory: Option<usize>,
    memory_count: usize,
}

impl<R, H: TimerHandle> Default for PageState<R, H> {
    fn default() -> Self {
        Self::new(usize::MAX, crate::celebration::DEFAULT_CELEBRATION)
    }
}

impl<R, H: TimerHandle> PageState<R, H> {
    /// `memory_count` bounds which gallery entries the modal may open.
    pub fn new(memory_count: usize, celebration: Duration) -> Self {
        Self {
            navigator: SectionNavigator::new(),
            playback: Playback::new(),
            celebration: Celebration::new(celebration),
            menu_open: false,
            selected_memory: None,
            memory_count,
        }
    }

    pub fn active_section(&self) -> Section {
        self.navigator.active()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn open_menu(&mut self) {
        self.menu_open = true;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn selected_memory(&self) -> Option<usize> {
        self.selected_memory
    }

    /// Open the modal viewer on a gallery entry. Out-of-range indices are ignored.
    pub fn open_memory(&mut self, index: usize) {
        if index < self.memory_count {
            self.selected_memory = Some(index);
        } else {
            tracing::debug!(index, "Ignoring out-of-range memory");
        }
    }

    pub fn close_memory(&mut self) {
        self.selected_memory = None;
    }
}

impl<R: Clone, H: TimerHandle> PageState<R, H> {
    /// Jump to a section. Closes the mobile overlay, which would otherwise
    /// hide the destination, and returns the region to scroll into view.
    pub fn go_to(&mut self, section: Section) -> Option<R> {
        self.menu_open = false;
        self.navigator.go_to(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::task::JoinHandle;

    type TestState = PageState<u8, JoinHandle<()>>;

    #[test]
    fn go_to_closes_menu() {
        let mut state = TestState::new(9, Duration::from_secs(10));
        state.navigator.register(Section::Wishes, Some(3));
        state.open_menu();

        assert_eq!(state.go_to(Section::Wishes), Some(3));
        assert!(!state.menu_open());
        assert_eq!(state.active_section(), Section::Wishes);
    }

    #[test]
    fn memory_modal_bounds() {
        let mut state = TestState::new(9, Duration::from_secs(10));
        state.open_memory(8);
        assert_eq!(state.selected_memory(), Some(8));

        state.open_memory(9);
        assert_eq!(state.selected_memory(), Some(8));

        state.close_memory();
        assert_eq!(state.selected_memory(), None);
    }
}
