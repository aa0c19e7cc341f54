use crate::constants::FPS_REPORT_INTERVAL_SEC;
use crate::render::Canvas2d;
use gloo::render::{request_animation_frame, AnimationFrame};
use instant::Instant;
use portfolio_core::{FrameOutcome, Stage};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub struct FrameContext {
    pub stage: Rc<RefCell<Stage>>,
    pub surface: Option<Canvas2d>,
    pub skipping: bool,
    pub stats: FrameStats,
}

impl FrameContext {
    pub fn new(stage: Rc<RefCell<Stage>>, surface: Option<Canvas2d>) -> Self {
        Self {
            stage,
            surface,
            skipping: false,
            stats: FrameStats::new(),
        }
    }

    pub fn frame(&mut self) {
        // No surface: nothing to animate, but the loop stays cheap.
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        match self.stage.borrow_mut().frame(surface) {
            FrameOutcome::Drawn => {
                if self.skipping {
                    log::info!("[frame] drawing resumed");
                    self.skipping = false;
                }
                self.stats.tick();
            }
            FrameOutcome::Skipped(e) => {
                if !self.skipping {
                    log::warn!("[frame] skipped: {}", e);
                    self.skipping = true;
                }
            }
            FrameOutcome::Halted => {}
        }
    }
}

pub struct FrameStats {
    window_start: Instant,
    frames: u32,
}

impl FrameStats {
    fn new() -> Self {
        Self {
            window_start: Instant::now(),
            frames: 0,
        }
    }

    fn tick(&mut self) {
        self.frames += 1;
        let elapsed = self.window_start.elapsed().as_secs_f32();
        if elapsed >= FPS_REPORT_INTERVAL_SEC {
            log::debug!("[frame] {:.1} fps", self.frames as f32 / elapsed);
            self.window_start = Instant::now();
            self.frames = 0;
        }
    }
}

/// Handle to the self-rescheduling `requestAnimationFrame` chain.
///
/// Stopping (or dropping) the handle cancels the pending frame and the chain
/// ends; no callback runs afterwards.
pub struct FrameLoop {
    pending: Rc<RefCell<Option<AnimationFrame>>>,
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn stop(&self) {
        if self.running.replace(false) {
            self.pending.borrow_mut().take();
            log::info!("[frame] loop stopped");
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let pending = Rc::new(RefCell::new(None));
    let running = Rc::new(Cell::new(true));
    schedule(frame_ctx, pending.clone(), running.clone());
    FrameLoop { pending, running }
}

fn schedule(
    frame_ctx: Rc<RefCell<FrameContext>>,
    pending: Rc<RefCell<Option<AnimationFrame>>>,
    running: Rc<Cell<bool>>,
) {
    let pending_tick = pending.clone();
    let handle = request_animation_frame(move |_timestamp| {
        pending_tick.borrow_mut().take();
        if !running.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        schedule(frame_ctx, pending_tick, running);
    });
    *pending.borrow_mut() = Some(handle);
}
