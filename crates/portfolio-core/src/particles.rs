//! Decorative particle field drawn behind the page.
//!
//! A fixed pool of point masses drifts at constant velocity and bounces off
//! the viewport edges. The field owns the viewport size and is the only
//! writer to its drawing surface; drawing goes through [`ParticleCanvas`] so
//! the browser canvas and host-side tests share the same code path.

use crate::constants::*;
use glam::Vec2;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ViewportError {
    #[error("viewport dimensions are not finite: {width}x{height}")]
    NonFinite { width: f32, height: f32 },
    #[error("viewport dimensions must be positive: {width}x{height}")]
    Empty { width: f32, height: f32 },
}

/// Size of the drawing surface in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<(), ViewportError> {
        let (width, height) = (self.width, self.height);
        if !width.is_finite() || !height.is_finite() {
            return Err(ViewportError::NonFinite { width, height });
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(ViewportError::Empty { width, height });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

impl Particle {
    /// Advance one frame and bounce off the `[0, extent]` box.
    ///
    /// A particle that crosses an edge during this step is mirrored back
    /// inside (or parked on that edge when the box is narrower than the
    /// step) and its velocity component flips. A particle that was already
    /// outside (the viewport shrank under it) keeps its position and only
    /// has its velocity turned back toward the interior, so it drifts home.
    #[inline]
    pub fn step(&mut self, extent: Vec2) {
        let prev = self.pos;
        self.pos += self.vel;
        reflect_axis(&mut self.pos.x, &mut self.vel.x, prev.x, extent.x);
        reflect_axis(&mut self.pos.y, &mut self.vel.y, prev.y, extent.y);
    }
}

#[inline]
fn reflect_axis(pos: &mut f32, vel: &mut f32, prev: f32, max: f32) {
    // An edge counts as crossed when this step carried the particle over it.
    if *pos < 0.0 {
        if prev >= 0.0 {
            // A box narrower than one step would mirror past the far edge.
            *pos = if -*pos <= max { -*pos } else { 0.0 };
        }
        *vel = vel.abs();
    } else if *pos > max {
        if prev <= max {
            let mirrored = 2.0 * max - *pos;
            *pos = if mirrored >= 0.0 { mirrored } else { max };
        }
        *vel = -vel.abs();
    }
}

/// Tunables for field creation. The particle count itself is fixed.
#[derive(Clone, Debug)]
pub struct FieldParams {
    pub max_speed: f32,
    pub radius_range: (f32, f32),
    pub opacity_range: (f32, f32),
    pub rgb: [u8; 3],
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            max_speed: PARTICLE_MAX_SPEED,
            radius_range: (PARTICLE_RADIUS_MIN, PARTICLE_RADIUS_MAX),
            opacity_range: (PARTICLE_OPACITY_MIN, PARTICLE_OPACITY_MAX),
            rgb: PARTICLE_RGB,
        }
    }
}

/// 2D drawing surface the field rasterizes into.
pub trait ParticleCanvas {
    fn clear(&mut self, viewport: Viewport);
    fn fill_circle(&mut self, center: Vec2, radius: f32, rgb: [u8; 3], alpha: f32);
}

pub struct ParticleField {
    particles: [Particle; PARTICLE_COUNT],
    viewport: Viewport,
    params: FieldParams,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(viewport: Viewport, params: FieldParams, rng: &mut R) -> Self {
        let w = viewport.width.max(0.0);
        let h = viewport.height.max(0.0);
        let particles = std::array::from_fn(|_| Particle {
            pos: Vec2::new(rng.gen::<f32>() * w, rng.gen::<f32>() * h),
            vel: Vec2::new(
                (rng.gen::<f32>() - 0.5) * 2.0 * params.max_speed,
                (rng.gen::<f32>() - 0.5) * 2.0 * params.max_speed,
            ),
            radius: lerp(params.radius_range, rng.gen::<f32>()),
            opacity: lerp(params.opacity_range, rng.gen::<f32>()),
        });
        Self {
            particles,
            viewport,
            params,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Store new dimensions. Particle positions are left as they are.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
    }

    /// Advance every particle by one frame.
    ///
    /// A malformed viewport leaves the particles untouched.
    pub fn step(&mut self) -> Result<(), ViewportError> {
        self.viewport.validate()?;
        let extent = Vec2::new(self.viewport.width, self.viewport.height);
        for p in self.particles.iter_mut() {
            p.step(extent);
        }
        Ok(())
    }

    /// Clear the surface and draw every particle as a filled circle.
    pub fn draw(&self, canvas: &mut impl ParticleCanvas) -> Result<(), ViewportError> {
        self.viewport.validate()?;
        canvas.clear(self.viewport);
        for p in &self.particles {
            canvas.fill_circle(p.pos, p.radius, self.params.rgb, p.opacity);
        }
        Ok(())
    }

    /// One animation frame: step then draw.
    pub fn frame(&mut self, canvas: &mut impl ParticleCanvas) -> Result<(), ViewportError> {
        self.step()?;
        self.draw(canvas)
    }
}

#[inline]
fn lerp((lo, hi): (f32, f32), t: f32) -> f32 {
    lo + (hi - lo) * t
}
