//! Entity records owned by the simulation state.
//!
//! Records are plain data. Behaviour lives in the sim crate's systems.

use std::collections::VecDeque;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Stable identity of a particle. Assigned once, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticleId(pub u32);

/// A drifting target in a formation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub id: ParticleId,
    pub position: DVec2,
    /// Heading in radians (0 = right, π = left, y grows downward).
    pub angle: f64,
    /// Pixels per frame along `angle`.
    pub speed: f64,
    /// Render radius, also the base of the hit radius.
    pub size: f64,
    /// Set once a missile has been assigned; never cleared.
    pub targeted: bool,
}

/// The shooter circling on the left of the screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: DVec2,
    pub angle: f64,
    pub size: f64,
    /// Orbit phase in radians; wraps back by 2π once it passes 2π.
    pub orbit_progress: f64,
    pub orbit_speed: f64,
    /// Horizontal displacement during the last orbit step.
    pub vx: f64,
}

/// One recorded position in a missile's trail.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrailPoint {
    pub position: DVec2,
    /// May go negative; anything non-positive is invisible.
    pub opacity: f64,
}

/// A pursuing missile. Refers to its target by id only; the target may
/// disappear at any time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Missile {
    pub position: DVec2,
    pub target_id: ParticleId,
    /// Newest first, at most `TRAIL_LENGTH` entries.
    pub trail: VecDeque<TrailPoint>,
}

/// Expanding, fading flash left by a hit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Explosion {
    pub position: DVec2,
    pub radius: f64,
    pub opacity: f64,
}

impl Particle {
    pub fn new(id: ParticleId, position: DVec2, speed: f64) -> Self {
        Self {
            id,
            position,
            angle: PARTICLE_INITIAL_ANGLE,
            speed,
            size: PARTICLE_SIZE,
            targeted: false,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self {
            position: DVec2::ZERO,
            angle: 0.0,
            size: PLAYER_SIZE,
            orbit_progress: 0.0,
            orbit_speed: ORBIT_SPEED,
            vx: 0.0,
        }
    }
}

impl Missile {
    pub fn launch(position: DVec2, target_id: ParticleId) -> Self {
        Self {
            position,
            target_id,
            trail: VecDeque::with_capacity(TRAIL_LENGTH + 1),
        }
    }
}

impl Explosion {
    pub fn at(position: DVec2) -> Self {
        Self {
            position,
            radius: EXPLOSION_START_RADIUS,
            opacity: EXPLOSION_START_OPACITY,
        }
    }
}
