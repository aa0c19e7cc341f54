use crate::style;
use glam::Vec2;
use portfolio_core::{ParticleCanvas, Viewport};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `ParticleCanvas` backed by a 2D canvas context.
pub struct Canvas2d {
    ctx: web::CanvasRenderingContext2d,
}

impl Canvas2d {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { ctx })
    }
}

impl ParticleCanvas for Canvas2d {
    fn clear(&mut self, viewport: Viewport) {
        self.ctx
            .clear_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, rgb: [u8; 3], alpha: f32) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(&style::rgba(rgb, alpha));
        self.ctx.fill();
    }
}
