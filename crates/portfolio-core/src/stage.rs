//! Lifecycle wrapper around the three animation subsystems.
//!
//! The web front-end forwards window events into a [`Stage`] and drives
//! [`Stage::frame`] from `requestAnimationFrame`. Once unmounted every entry
//! point is inert, so late callbacks from the host cannot touch a torn-down
//! surface.

use crate::cursor::CursorFollower;
use crate::particles::{FieldParams, ParticleCanvas, ParticleField, Viewport, ViewportError};
use crate::scroll_spy::{ScrollSpy, SectionLayout};
use crate::section::Section;
use glam::Vec2;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    Drawn,
    Skipped(ViewportError),
    Halted,
}

pub struct Stage {
    pub field: ParticleField,
    pub cursor: CursorFollower,
    pub spy: ScrollSpy,
    mounted: bool,
    frames: u64,
}

impl Stage {
    pub fn mount<R: Rng + ?Sized>(viewport: Viewport, params: FieldParams, rng: &mut R) -> Self {
        Self::with_spy(viewport, params, ScrollSpy::default(), rng)
    }

    pub fn with_spy<R: Rng + ?Sized>(
        viewport: Viewport,
        params: FieldParams,
        spy: ScrollSpy,
        rng: &mut R,
    ) -> Self {
        Self {
            field: ParticleField::new(viewport, params, rng),
            cursor: CursorFollower::default(),
            spy,
            mounted: true,
            frames: 0,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Frames drawn since mount.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn frame(&mut self, canvas: &mut impl ParticleCanvas) -> FrameOutcome {
        if !self.mounted {
            return FrameOutcome::Halted;
        }
        match self.field.frame(canvas) {
            Ok(()) => {
                self.frames += 1;
                FrameOutcome::Drawn
            }
            Err(e) => FrameOutcome::Skipped(e),
        }
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> Option<Vec2> {
        self.mounted.then(|| self.cursor.on_pointer_move(x, y))
    }

    pub fn on_scroll(&mut self, offset_y: f64, layout: &impl SectionLayout) -> Option<Section> {
        if !self.mounted {
            return None;
        }
        self.spy.on_scroll(offset_y, layout)
    }

    pub fn on_resize(&mut self, width: f32, height: f32) {
        if self.mounted {
            self.field.resize(width, height);
        }
    }

    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.cursor.reset();
        log::info!("[stage] unmounted after {} frames", self.frames);
    }
}
