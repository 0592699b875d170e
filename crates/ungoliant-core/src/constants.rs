//! Animation constants and tuning parameters.
//!
//! Distances are in pixels, speeds in pixels per frame, times in milliseconds.

use std::f64::consts::PI;

// --- Viewport ---

/// Fallback surface width before the host reports a real size.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;

/// Fallback surface height before the host reports a real size.
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 720.0;

// --- Formation spawning ---

/// Particles per formation; also the cap on live missiles.
pub const MAX_PARTICLES: usize = 5;

/// Minimum time between formations (10 seconds).
pub const FORMATION_INTERVAL_MS: f64 = 10_000.0;

/// Formation band width as a fraction of viewport width.
pub const FORMATION_WIDTH_FRACTION: f64 = 0.2;

/// Formation band height as a fraction of viewport height.
pub const FORMATION_HEIGHT_FRACTION: f64 = 0.4;

/// Left edge of the formation band, 1% in from the right edge.
pub const FORMATION_START_X_FRACTION: f64 = 0.99;

// --- Particles ---

/// Render size of a particle triangle.
pub const PARTICLE_SIZE: f64 = 6.0;

/// Speed = (BASE + U(0,1) * RANGE) * MULTIPLIER, i.e. 0.15..0.45.
pub const PARTICLE_BASE_SPEED: f64 = 0.1;
pub const PARTICLE_SPEED_RANGE: f64 = 0.2;
pub const PARTICLE_SPEED_MULTIPLIER: f64 = 1.5;

/// Initial heading, pointing left.
pub const PARTICLE_INITIAL_ANGLE: f64 = PI;

/// Per-frame probability of a heading change.
pub const HEADING_JITTER_CHANCE: f64 = 0.02;

/// Full width of the heading change: offset = (U(0,1) - 0.5) * SPAN,
/// so the change is at most ±π/18 (±10°).
pub const HEADING_JITTER_SPAN: f64 = PI / 9.0;

// --- Player orbit ---

pub const PLAYER_SIZE: f64 = 10.0;

/// Orbit phase advance per frame (radians).
pub const ORBIT_SPEED: f64 = 0.004;

/// How far ahead on the orbit the heading is sampled (radians).
pub const ORBIT_LOOKAHEAD: f64 = 0.1;

pub const ORBIT_CENTER_X_FRACTION: f64 = 0.2;
pub const ORBIT_CENTER_Y_FRACTION: f64 = 0.5;
pub const ORBIT_RADIUS_X_FRACTION: f64 = 0.1;
pub const ORBIT_RADIUS_Y_FRACTION: f64 = 0.05;

// --- Fire control ---

/// Minimum time between launches (1 second).
pub const MISSILE_FIRE_INTERVAL_MS: f64 = 1_000.0;

/// Launch count that arms the delayed cooldown-bypass check.
pub const BURST_SIZE: u32 = 5;

/// Delay before the cooldown-bypass check runs.
pub const BURST_CHECK_DELAY_MS: f64 = 1_000.0;

// --- Missiles ---

/// Pursuit speed (pixels per frame).
pub const MISSILE_SPEED: f64 = 1.5;

/// Added to the target size to get the hit radius.
pub const COLLISION_MARGIN: f64 = 5.0;

/// Maximum number of trail points kept per missile.
pub const TRAIL_LENGTH: usize = 5;

/// Opacity of a freshly recorded trail point.
pub const TRAIL_START_OPACITY: f64 = 0.8;

/// Opacity lost by every trail point each frame.
pub const TRAIL_FADE_PER_FRAME: f64 = 0.15;

/// Width of the short horizontal stroke used for trail points and the head.
pub const MISSILE_STROKE_LENGTH: f64 = 2.0;

// --- Explosions ---

pub const EXPLOSION_START_RADIUS: f64 = 1.0;
pub const EXPLOSION_START_OPACITY: f64 = 1.0;
pub const EXPLOSION_GROWTH_PER_FRAME: f64 = 0.5;
pub const EXPLOSION_FADE_PER_FRAME: f64 = 0.05;

// --- Rendering ---

/// Alpha of the black wash painted over the surface each frame.
pub const BACKGROUND_FADE_ALPHA: f64 = 0.1;

/// Alpha shared by the particle and player fills.
pub const SHIP_ALPHA: f64 = 0.8;
