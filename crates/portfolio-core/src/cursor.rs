use glam::Vec2;

/// Decorative element that sits on the pointer.
///
/// Every pointer-move overwrites the stored position; there is no smoothing
/// or threshold. The returned placement is the element's centre; the web
/// side shifts the element by half its size in CSS.
#[derive(Clone, Copy, Debug, Default)]
pub struct CursorFollower {
    pointer: Option<Vec2>,
}

impl CursorFollower {
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> Vec2 {
        let p = Vec2::new(x, y);
        self.pointer = Some(p);
        p
    }

    /// Centre of the follower, `None` until the pointer has moved once.
    pub fn center(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn reset(&mut self) {
        self.pointer = None;
    }
}
