//! Fire control system: picks the nearest free target and launches a missile.
//!
//! Launch gates, all of which must hold:
//! - more than `MISSILE_FIRE_INTERVAL_MS` since the last launch
//! - fewer than `MAX_PARTICLES` missiles in flight
//! - at least one untargeted particle left of the right edge
//! - the player is moving right (`vx > 0`)
//!
//! After the `BURST_SIZE`th launch a check is armed for one second later.
//! If free targets remain then, the counter and the rate limit are reset
//! so the shooter can fire again immediately.

use glam::DVec2;

use ungoliant_core::components::{Missile, Particle};
use ungoliant_core::constants::*;
use ungoliant_core::events::SimEvent;
use ungoliant_core::types::Viewport;

use crate::world::SimulationState;

/// Index of the nearest untargeted on-screen particle. Ties go to the
/// particle that comes first in `particles`.
pub fn select_target(particles: &[Particle], from: DVec2, viewport: &Viewport) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, particle) in particles.iter().enumerate() {
        if !is_free_target(particle, viewport) {
            continue;
        }
        let distance = particle.position.distance(from);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}

/// Whether any untargeted particle is still on screen.
pub fn has_free_targets(particles: &[Particle], viewport: &Viewport) -> bool {
    particles.iter().any(|p| is_free_target(p, viewport))
}

fn is_free_target(particle: &Particle, viewport: &Viewport) -> bool {
    !particle.targeted && viewport.is_on_screen_x(particle.position.x)
}

/// Run the fire control system for one frame. Returns whether a missile
/// was launched.
pub fn run(
    state: &mut SimulationState,
    viewport: &Viewport,
    timestamp_ms: f64,
    events: &mut Vec<SimEvent>,
) -> bool {
    if timestamp_ms - state.last_fire_ms <= MISSILE_FIRE_INTERVAL_MS
        || state.missiles.len() >= MAX_PARTICLES
        || state.particles.is_empty()
        || state.player.vx <= 0.0
    {
        return false;
    }

    let Some(index) = select_target(&state.particles, state.player.position, viewport) else {
        return false;
    };

    // Claim the target before the missile exists so nothing else picks it.
    let target = &mut state.particles[index];
    target.targeted = true;
    let target_id = target.id;

    state.missiles.push(Missile::launch(state.player.position, target_id));
    state.last_fire_ms = timestamp_ms;
    state.shots_fired += 1;
    events.push(SimEvent::MissileFired);
    log::trace!("missile away at {timestamp_ms:.0}ms -> particle {}", target_id.0);

    // Equality, not a multiple: if the check finds nothing to shoot the
    // counter keeps climbing and the bypass stays disarmed.
    if state.shots_fired == BURST_SIZE {
        state.burst_check_due_ms = Some(timestamp_ms + BURST_CHECK_DELAY_MS);
    }
    true
}

/// Run the delayed cooldown-bypass check if it is due. Returns whether the
/// fire counter and rate limit were reset.
pub fn run_burst_check(state: &mut SimulationState, viewport: &Viewport, timestamp_ms: f64) -> bool {
    match state.burst_check_due_ms {
        Some(due) if timestamp_ms >= due => {}
        _ => return false,
    }
    state.burst_check_due_ms = None;

    if !has_free_targets(&state.particles, viewport) {
        return false;
    }

    state.shots_fired = 0;
    state.last_fire_ms = 0.0;
    log::debug!("burst check at {timestamp_ms:.0}ms: free targets remain, cooldown cleared");
    true
}
