/// Number of particles spawned at startup
pub const DEFAULT_PARTICLE_COUNT: u32 = 4096;

/// Compute shader workgroup size (1D)
pub const WORKGROUP_SIZE: u32 = 64;

// ============================================
// Logo Sampling
// ============================================

/// Pixels with alpha at or above this are part of the logo
pub const ALPHA_THRESHOLD: u8 = 128;

/// Sample every Nth pixel in both directions
pub const SAMPLE_STRIDE: u32 = 2;

/// Relative weight of interior pixels
pub const FILL_WEIGHT: f32 = 1.0;

/// Relative weight of edge pixels (edges read better with more particles)
pub const BORDER_WEIGHT: f32 = 3.0;

/// Half-extent in NDC of the logo's longest side
pub const LOGO_EXTENT: f32 = 0.75;

/// Side length of the procedurally drawn fallback logo
pub const BUILTIN_LOGO_SIZE: u32 = 256;

// ============================================
// Rest Scatter
// ============================================

pub const SCATTER_MIN_RADIUS: f32 = 0.15;
pub const SCATTER_MAX_RADIUS: f32 = 0.6;

/// Fraction of a sample cell used to jitter mass points
pub const MASS_JITTER: f32 = 1.0;

// ============================================
// Forces
// ============================================

pub const SPRING_STRENGTH: f32 = 40.0;
pub const DAMPING: f32 = 6.0;
pub const REPULSION_STRENGTH: f32 = 2.0;
pub const REPULSION_RADIUS: f32 = 0.02;
pub const RELAX_STRENGTH: f32 = 4.0;
pub const WIGGLE_STRENGTH: f32 = 0.3;
pub const WIGGLE_FREQUENCY: f32 = 1.5;
pub const MAX_SPEED: f32 = 3.0;
pub const EDGE_STIFFNESS: f32 = 20.0;

/// Multiplier applied per keypress when tuning a force constant
pub const TUNE_STEP: f32 = 1.1;

// ============================================
// Timing
// ============================================

/// Largest simulated step; longer frames (window drag, stalls) are clamped
pub const MAX_FRAME_DT: f32 = 1.0 / 30.0;

/// Rate at which the hover blend approaches its target (per second)
pub const HOVER_BLEND_RATE: f32 = 4.0;

// ============================================
// Rendering
// ============================================

/// Particle quad half-size in logo space
pub const POINT_SIZE: f32 = 0.012;

/// Speed at which particles are fully tinted with FAST_COLOR
pub const SPEED_TINT: f32 = 1.5;

pub const BASE_COLOR: [f32; 4] = [0.55, 0.62, 1.0, 0.9];
pub const FAST_COLOR: [f32; 4] = [1.0, 0.55, 0.85, 1.0];

pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.02,
    b: 0.04,
    a: 1.0,
};

pub const WINDOW_WIDTH: u32 = 1024;
pub const WINDOW_HEIGHT: u32 = 768;
