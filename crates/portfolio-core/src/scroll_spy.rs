//! Maps the vertical scroll offset to the section the reader is looking at.

use crate::constants::{SCROLL_LOOKAHEAD_PX, SECTION_ORDER};
use crate::section::Section;

/// Vertical extent of a section in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    #[inline]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Current layout lookup. Returns `None` when the section has no element.
pub trait SectionLayout {
    fn bounds(&self, section: Section) -> Option<SectionBounds>;
}

#[derive(Clone, Debug)]
pub struct ScrollSpy {
    sections: Vec<Section>,
    lookahead: f64,
    active: Section,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new(SECTION_ORDER.to_vec(), SCROLL_LOOKAHEAD_PX)
    }
}

impl ScrollSpy {
    /// Sections are scanned in the given order; the first one starts active.
    pub fn new(sections: Vec<Section>, lookahead: f64) -> Self {
        let active = sections.first().copied().unwrap_or_default();
        Self {
            sections,
            lookahead,
            active,
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn lookahead(&self) -> f64 {
        self.lookahead
    }

    /// Re-evaluate the active section for a new scroll offset.
    ///
    /// First match wins. When no section contains the probe position the
    /// previous value is kept. Returns the new section only when it changed.
    pub fn on_scroll(&mut self, offset_y: f64, layout: &impl SectionLayout) -> Option<Section> {
        let probe = offset_y + self.lookahead;
        let hit = self
            .sections
            .iter()
            .copied()
            .find(|s| layout.bounds(*s).is_some_and(|b| b.contains(probe)))?;
        if hit == self.active {
            return None;
        }
        log::debug!("[scroll] active section {} -> {}", self.active, hit);
        self.active = hit;
        Some(hit)
    }
}
