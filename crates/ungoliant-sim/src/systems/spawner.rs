//! Formation spawner: drops a fresh batch of particles once the field is clear.

use glam::DVec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use ungoliant_core::components::Particle;
use ungoliant_core::constants::*;
use ungoliant_core::types::Viewport;

use crate::world::SimulationState;

/// Spawn a formation if the interval has elapsed and no particles are live.
/// Returns whether a formation was spawned.
pub fn run(
    state: &mut SimulationState,
    rng: &mut ChaCha8Rng,
    viewport: &Viewport,
    timestamp_ms: f64,
) -> bool {
    if timestamp_ms - state.last_formation_ms <= FORMATION_INTERVAL_MS || !state.particles.is_empty() {
        return false;
    }

    spawn_formation(state, rng, viewport);
    state.last_formation_ms = timestamp_ms;
    log::debug!(
        "formation spawned at {timestamp_ms:.0}ms ({} particles)",
        state.particles.len()
    );
    true
}

/// Scatter `MAX_PARTICLES` particles over the formation band.
pub fn spawn_formation(state: &mut SimulationState, rng: &mut ChaCha8Rng, viewport: &Viewport) {
    let rect = viewport.formation_rect();

    for _ in 0..MAX_PARTICLES {
        let position = rect.origin + DVec2::new(rng.gen::<f64>(), rng.gen::<f64>()) * rect.size;
        let speed =
            (PARTICLE_BASE_SPEED + rng.gen::<f64>() * PARTICLE_SPEED_RANGE) * PARTICLE_SPEED_MULTIPLIER;
        let id = state.allocate_particle_id();
        state.particles.push(Particle::new(id, position, speed));
    }
}
