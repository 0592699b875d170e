//! Particle kinematics: straight-line drift, occasional heading jitter,
//! and screen wrap on the left, top and bottom edges.

use glam::DVec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use ungoliant_core::components::Particle;
use ungoliant_core::constants::{HEADING_JITTER_CHANCE, HEADING_JITTER_SPAN};
use ungoliant_core::types::Viewport;

/// Advance one particle by one frame.
pub fn step(particle: &mut Particle, rng: &mut ChaCha8Rng, viewport: &Viewport) {
    particle.position += DVec2::from_angle(particle.angle) * particle.speed;

    // Span is π/9 wide: the change is at most ±10°.
    if rng.gen::<f64>() < HEADING_JITTER_CHANCE {
        particle.angle += (rng.gen::<f64>() - 0.5) * HEADING_JITTER_SPAN;
    }

    wrap(particle, viewport);
}

/// Wrap around the left, top and bottom edges. There is no right-edge wrap:
/// a particle drifting right stays off-screen.
pub fn wrap(particle: &mut Particle, viewport: &Viewport) {
    let size = particle.size;
    if particle.position.x < -size {
        particle.position.x = viewport.width + size;
    }
    if particle.position.y < -size {
        particle.position.y = viewport.height + size;
    }
    if particle.position.y > viewport.height + size {
        particle.position.y = -size;
    }
}
