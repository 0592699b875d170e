//! Player orbit: a fixed ellipse on the left third of the screen.

use std::f64::consts::TAU;

use glam::DVec2;

use ungoliant_core::components::Player;
use ungoliant_core::constants::ORBIT_LOOKAHEAD;
use ungoliant_core::types::Viewport;

/// Point on the orbit at `phase` radians.
pub fn orbit_point(viewport: &Viewport, phase: f64) -> DVec2 {
    viewport.orbit_center() + DVec2::new(phase.cos(), phase.sin()) * viewport.orbit_radii()
}

/// Place the player at its current phase, derive `vx` and heading, then
/// advance the phase.
pub fn step(player: &mut Player, viewport: &Viewport) {
    let previous_x = player.position.x;
    player.position = orbit_point(viewport, player.orbit_progress);
    player.vx = player.position.x - previous_x;

    // Heading points at a spot slightly ahead on the ellipse.
    let ahead = orbit_point(viewport, player.orbit_progress + ORBIT_LOOKAHEAD);
    let to_ahead = ahead - player.position;
    player.angle = to_ahead.y.atan2(to_ahead.x);

    player.orbit_progress += player.orbit_speed;
    if player.orbit_progress > TAU {
        player.orbit_progress -= TAU;
    }
}
