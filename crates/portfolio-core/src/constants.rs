use crate::section::Section;

// Tuning constants for the decorative animation layer.

// Particle field
pub const PARTICLE_COUNT: usize = 100;
pub const PARTICLE_MAX_SPEED: f32 = 0.25; // px per frame, per axis
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_MAX: f32 = 3.0;
pub const PARTICLE_OPACITY_MIN: f32 = 0.2;
pub const PARTICLE_OPACITY_MAX: f32 = 0.7;
pub const PARTICLE_RGB: [u8; 3] = [0, 255, 255]; // cyan

// Scroll spy
pub const SCROLL_LOOKAHEAD_PX: f64 = 100.0; // activates a section slightly before it reaches the top
pub const SECTION_ORDER: [Section; 4] = [
    Section::About,
    Section::Skills,
    Section::Projects,
    Section::Contact,
];
