//! Passive visibility observation.
//!
//! A [`VisibilitySource`] watches section regions and reports how much of each
//! one is inside the viewport. Raw [`RegionSample`]s are reduced by a
//! [`ThresholdTracker`] into [`VisibilityEntry`] batches that only contain
//! threshold crossings, which is the single callback shape the
//! [`SectionNavigator`](crate::SectionNavigator) consumes.
//!
//! Two sources exist:
//! - the webview bridge in the desktop app (an `IntersectionObserver`)
//! - [`SimulatedViewport`], a geometric model used by tests and the CLI tour

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::PageResult;
use crate::section::Section;

/// Coverage at which a section counts as "in view".
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Source of visibility notifications for section regions.
///
/// Notifications are delivered asynchronously relative to the scroll that
/// caused them, as [`VisibilityBatch`]es, through whatever channel the
/// implementation owns.
pub trait VisibilitySource {
    /// Start reporting threshold crossings for the region of `section`.
    fn subscribe(&mut self, section: Section) -> PageResult<()>;

    /// Stop all reporting and release host callbacks.
    fn unsubscribe_all(&mut self);
}

/// Raw geometry reported for one region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionSample {
    pub section: Section,
    /// Height of the part of the region inside the viewport
    pub visible_height: f64,
    /// Full height of the region
    pub region_height: f64,
    /// Height of the viewport
    pub viewport_height: f64,
}

impl RegionSample {
    /// Fraction of the region's viewable extent that is visible.
    ///
    /// The denominator is the smaller of region and viewport height, so a
    /// region taller than the viewport reaches full coverage when it fills
    /// the screen.
    pub fn coverage(&self) -> f64 {
        let extent = self.region_height.min(self.viewport_height);
        if extent <= 0.0 {
            return 0.0;
        }
        (self.visible_height / extent).clamp(0.0, 1.0)
    }
}

/// A threshold crossing (or initial notification) for one section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisibilityEntry {
    pub section: Section,
    pub ratio: f64,
    pub is_intersecting: bool,
}

/// Entries delivered together, in processing order.
pub type VisibilityBatch = Vec<VisibilityEntry>;

/// Reduces raw samples to threshold crossings.
///
/// The first sample seen for a section always produces an entry, mirroring the
/// initial notification a browser observer delivers on `observe`.
#[derive(Debug, Clone)]
pub struct ThresholdTracker {
    threshold: f64,
    above: HashMap<Section, bool>,
}

impl ThresholdTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            above: HashMap::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Feed samples and collect the entries whose side of the threshold changed.
    pub fn track<I>(&mut self, samples: I) -> VisibilityBatch
    where
        I: IntoIterator<Item = RegionSample>,
    {
        let mut batch = VisibilityBatch::new();
        for sample in samples {
            let ratio = sample.coverage();
            let is_intersecting = ratio >= self.threshold;
            match self.above.insert(sample.section, is_intersecting) {
                Some(previous) if previous == is_intersecting => {}
                _ => batch.push(VisibilityEntry {
                    section: sample.section,
                    ratio,
                    is_intersecting,
                }),
            }
        }
        batch
    }

    /// Drop the remembered side for one section; its next sample re-notifies.
    pub fn forget(&mut self, section: Section) {
        self.above.remove(&section);
    }

    pub fn reset(&mut self) {
        self.above.clear();
    }
}

impl Default for ThresholdTracker {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

/// Vertical placement of a region within the document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionBounds {
    pub top: f64,
    pub height: f64,
}

impl RegionBounds {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Geometric viewport over a fixed layout of sections.
///
/// Scrolling is expressed as document offsets; every move samples the
/// subscribed regions through a [`ThresholdTracker`].
#[derive(Debug, Clone)]
pub struct SimulatedViewport {
    viewport_height: f64,
    layout: Vec<(Section, RegionBounds)>,
    scroll_y: f64,
    subscribed: Vec<Section>,
    tracker: ThresholdTracker,
}

impl SimulatedViewport {
    pub fn new(viewport_height: f64, layout: Vec<(Section, RegionBounds)>, threshold: f64) -> Self {
        Self {
            viewport_height,
            layout,
            scroll_y: 0.0,
            subscribed: Vec::new(),
            tracker: ThresholdTracker::new(threshold),
        }
    }

    /// Lay sections out back to back starting at offset 0.
    pub fn stacked(viewport_height: f64, heights: &[(Section, f64)], threshold: f64) -> Self {
        let mut top = 0.0;
        let layout = heights
            .iter()
            .map(|&(section, height)| {
                let bounds = RegionBounds { top, height };
                top += height;
                (section, bounds)
            })
            .collect();
        Self::new(viewport_height, layout, threshold)
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn document_height(&self) -> f64 {
        self.layout
            .iter()
            .map(|(_, bounds)| bounds.bottom())
            .fold(0.0, f64::max)
    }

    pub fn max_scroll(&self) -> f64 {
        (self.document_height() - self.viewport_height).max(0.0)
    }

    pub fn bounds_of(&self, section: Section) -> Option<RegionBounds> {
        self.layout
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, bounds)| *bounds)
    }

    /// Scroll offset that aligns the section's top with the viewport top,
    /// clamped to what the document allows.
    pub fn offset_of(&self, section: Section) -> Option<f64> {
        self.bounds_of(section)
            .map(|bounds| bounds.top.clamp(0.0, self.max_scroll()))
    }

    /// Sample subscribed regions at the current position.
    pub fn sample(&mut self) -> VisibilityBatch {
        let view_top = self.scroll_y;
        let view_bottom = self.scroll_y + self.viewport_height;
        let viewport_height = self.viewport_height;

        let samples: Vec<RegionSample> = self
            .layout
            .iter()
            .filter(|(section, _)| self.subscribed.contains(section))
            .map(|&(section, bounds)| {
                let visible = (bounds.bottom().min(view_bottom) - bounds.top.max(view_top)).max(0.0);
                RegionSample {
                    section,
                    visible_height: visible,
                    region_height: bounds.height,
                    viewport_height,
                }
            })
            .collect();

        self.tracker.track(samples)
    }

    /// Jump to `y` (clamped) and report crossings.
    pub fn scroll_to(&mut self, y: f64) -> VisibilityBatch {
        self.scroll_y = y.clamp(0.0, self.max_scroll());
        self.sample()
    }

    /// Animate linearly to `y` over `frames` steps, one batch per frame that
    /// produced crossings.
    pub fn smooth_scroll(&mut self, y: f64, frames: usize) -> Vec<VisibilityBatch> {
        let start = self.scroll_y;
        let target = y.clamp(0.0, self.max_scroll());
        let frames = frames.max(1);

        (1..=frames)
            .map(|frame| {
                let progress = frame as f64 / frames as f64;
                self.scroll_to(start + (target - start) * progress)
            })
            .filter(|batch| !batch.is_empty())
            .collect()
    }
}

impl VisibilitySource for SimulatedViewport {
    fn subscribe(&mut self, section: Section) -> PageResult<()> {
        if self.bounds_of(section).is_none() {
            tracing::debug!(%section, "No region laid out for section, skipping subscription");
            return Ok(());
        }
        if !self.subscribed.contains(&section) {
            self.subscribed.push(section);
        }
        Ok(())
    }

    fn unsubscribe_all(&mut self) {
        self.subscribed.clear();
        self.tracker.reset();
    }
}
