//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Pixel dimensions of the drawing surface.
/// x grows to the right, y grows downward (canvas convention).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Axis-aligned rectangle (origin is the top-left corner).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: DVec2,
    pub size: DVec2,
}

/// Frame timing tracked by the animation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FrameTime {
    /// Number of frames rendered so far.
    pub frame: u64,
    /// Timestamp (ms) handed to the most recent frame.
    pub timestamp_ms: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT)
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Region new formations are scattered over: a band hugging the right
    /// edge, vertically centred.
    pub fn formation_rect(&self) -> Rect {
        let size = DVec2::new(
            self.width * FORMATION_WIDTH_FRACTION,
            self.height * FORMATION_HEIGHT_FRACTION,
        );
        let origin = DVec2::new(
            self.width * FORMATION_START_X_FRACTION,
            self.height / 2.0 - size.y / 2.0,
        );
        Rect { origin, size }
    }

    /// Centre of the player's elliptical orbit.
    pub fn orbit_center(&self) -> DVec2 {
        DVec2::new(
            self.width * ORBIT_CENTER_X_FRACTION,
            self.height * ORBIT_CENTER_Y_FRACTION,
        )
    }

    /// Horizontal and vertical radii of the player's orbit.
    pub fn orbit_radii(&self) -> DVec2 {
        DVec2::new(
            self.width * ORBIT_RADIUS_X_FRACTION,
            self.height * ORBIT_RADIUS_Y_FRACTION,
        )
    }

    /// Only the right edge counts; anything left of it is fair game for targeting.
    pub fn is_on_screen_x(&self, x: f64) -> bool {
        x < self.width
    }
}

impl Rect {
    /// Inclusive containment test.
    pub fn contains(&self, point: DVec2) -> bool {
        let max = self.origin + self.size;
        point.x >= self.origin.x && point.x <= max.x && point.y >= self.origin.y && point.y <= max.y
    }
}

impl FrameTime {
    /// Record that a frame ran at `timestamp_ms`.
    pub fn advance(&mut self, timestamp_ms: f64) {
        self.frame += 1;
        self.timestamp_ms = timestamp_ms;
    }
}
