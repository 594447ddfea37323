//! Section Navigator.
//!
//! Tracks which section is active and keeps it consistent across explicit
//! jumps ([`go_to`](SectionNavigator::go_to)) and passive visibility
//! crossings ([`observe`](SectionNavigator::observe)).
//!
//! ## Convergence
//!
//! A jump starts a smooth scroll that crosses other sections on its way, so
//! passive updates may briefly highlight them. Once the host reports that the
//! viewport is static, [`settle`](SectionNavigator::settle) forces the active
//! section back to the last jump destination, provided that destination is
//! still in view. A jump the user scrolled away from (or one that never
//! moved the viewport) is dropped, and the highlight stays on what is
//! actually on screen.
//!
//! Hosts report a settle after every jump, including one that scrolls
//! nothing, so a destination never outlives its own scroll.

use std::collections::{HashMap, HashSet};

use crate::section::Section;
use crate::visibility::VisibilityEntry;

/// Registry of section regions plus the single active section.
///
/// `R` is whatever handle the host needs to scroll a region into view.
#[derive(Debug, Clone)]
pub struct SectionNavigator<R> {
    regions: HashMap<Section, R>,
    active: Section,
    pending: Option<Section>,
    /// Sections whose latest entry was intersecting
    in_view: HashSet<Section>,
}

impl<R> Default for SectionNavigator<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> SectionNavigator<R> {
    pub fn new() -> Self {
        Self {
            regions: HashMap::new(),
            active: Section::default(),
            pending: None,
            in_view: HashSet::new(),
        }
    }

    /// The section currently deemed in view.
    pub fn active(&self) -> Section {
        self.active
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }

    /// Destination of a jump whose scroll has not settled yet.
    pub fn pending(&self) -> Option<Section> {
        self.pending
    }

    /// Whether the latest entry for `section` was intersecting.
    pub fn in_view(&self, section: Section) -> bool {
        self.in_view.contains(&section)
    }

    pub fn is_registered(&self, section: Section) -> bool {
        self.regions.contains_key(&section)
    }

    pub fn region(&self, section: Section) -> Option<&R> {
        self.regions.get(&section)
    }

    /// Associate a section with its rendered region.
    ///
    /// `None` is a no-op: a missing region never removes an existing one.
    pub fn register(&mut self, section: Section, region: Option<R>) {
        match region {
            Some(region) => {
                if self.regions.insert(section, region).is_some() {
                    tracing::trace!(%section, "Section region replaced");
                } else {
                    tracing::debug!(%section, "Section region registered");
                }
            }
            None => tracing::trace!(%section, "Ignoring empty section region"),
        }
    }

    /// Apply one batch of visibility entries in order.
    ///
    /// Returns true if the active section changed. When several entries are
    /// intersecting, the last one wins.
    pub fn observe(&mut self, batch: &[VisibilityEntry]) -> bool {
        let before = self.active;
        for entry in batch {
            if !entry.is_intersecting {
                self.in_view.remove(&entry.section);
                continue;
            }
            self.in_view.insert(entry.section);
            if !self.is_registered(entry.section) {
                tracing::trace!(section = %entry.section, "Visibility entry for unregistered section");
                continue;
            }
            self.active = entry.section;
        }

        if self.active != before {
            tracing::debug!(from = %before, to = %self.active, "Active section follows scroll");
            true
        } else {
            false
        }
    }

    /// The viewport stopped moving.
    ///
    /// Snaps to the pending jump destination if it is in view, otherwise
    /// drops it. Either way the active section ends up on screen whenever
    /// any registered section is.
    pub fn settle(&mut self) {
        match self.pending.take() {
            Some(target) if self.in_view(target) => {
                if self.active != target {
                    tracing::debug!(from = %self.active, to = %target, "Settling on jump destination");
                }
                self.active = target;
            }
            Some(target) => {
                tracing::debug!(%target, active = %self.active, "Jump destination out of view, dropping it");
            }
            None => {}
        }

        if self.in_view(self.active) {
            return;
        }
        let on_screen = Section::ALL
            .into_iter()
            .find(|&section| self.in_view(section) && self.is_registered(section));
        if let Some(section) = on_screen {
            tracing::debug!(from = %self.active, to = %section, "Settling on section in view");
            self.active = section;
        }
    }
}

impl<R: Clone> SectionNavigator<R> {
    /// Make `section` active immediately and return the region to scroll to.
    ///
    /// An unregistered section still becomes active; there is just nothing
    /// to scroll.
    pub fn go_to(&mut self, section: Section) -> Option<R> {
        self.active = section;
        let region = self.regions.get(&section).cloned();
        self.pending = region.as_ref().map(|_| section);
        tracing::debug!(%section, scrolling = region.is_some(), "Navigating to section");
        region
    }
}
