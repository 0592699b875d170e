//! Renderer: paints each entity kind onto a [`Surface`].
//!
//! Drawing is immediate mode; nothing here keeps state between frames.

use std::f64::consts::TAU;

use ungoliant_core::components::{Explosion, Missile, Particle, Player};
use ungoliant_core::constants::*;
use ungoliant_core::events::SimEvent;
use ungoliant_core::surface::{Rgba, Surface};
use ungoliant_core::types::Viewport;

/// Muted tomato red.
pub fn particle_color() -> Rgba {
    Rgba::new(255, 99, 71, SHIP_ALPHA)
}

/// Muted light blue.
pub fn player_color() -> Rgba {
    Rgba::new(173, 216, 230, SHIP_ALPHA)
}

/// Translucent black wash; older frames fade into motion streaks.
pub fn fade_background(surface: &mut dyn Surface, viewport: &Viewport) {
    surface.set_fill_style(Rgba::black(BACKGROUND_FADE_ALPHA));
    surface.fill_rect(0.0, 0.0, viewport.width, viewport.height);
}

/// Small triangle pointing along the particle's heading.
pub fn draw_particle(surface: &mut dyn Surface, particle: &Particle) {
    let size = particle.size;
    surface.set_fill_style(particle_color());
    surface.save();
    surface.translate(particle.position.x, particle.position.y);
    surface.rotate(particle.angle);
    surface.begin_path();
    surface.move_to(size, 0.0);
    surface.line_to(-size / 2.0, -size / 2.0);
    surface.line_to(-size / 2.0, size / 2.0);
    surface.close_path();
    surface.fill();
    surface.restore();
}

/// Elongated triangle pointing along the player's heading.
pub fn draw_player(surface: &mut dyn Surface, player: &Player) {
    let size = player.size;
    surface.save();
    surface.translate(player.position.x, player.position.y);
    surface.rotate(player.angle);
    surface.set_fill_style(player_color());
    surface.begin_path();
    surface.move_to(size, 0.0);
    surface.line_to(-size, -size / 2.0);
    surface.line_to(-size, size / 2.0);
    surface.close_path();
    surface.fill();
    surface.restore();
}

/// Trail points as short fading strokes, then an opaque head.
/// Points whose opacity has dropped to zero or below are skipped.
pub fn draw_missile(surface: &mut dyn Surface, missile: &Missile) {
    for point in missile.trail.iter().filter(|p| p.opacity > 0.0) {
        surface.set_stroke_style(Rgba::white(point.opacity));
        stroke_dash(surface, point.position.x, point.position.y);
    }

    surface.set_stroke_style(Rgba::white(1.0));
    stroke_dash(surface, missile.position.x, missile.position.y);
}

fn stroke_dash(surface: &mut dyn Surface, x: f64, y: f64) {
    surface.begin_path();
    surface.move_to(x, y);
    surface.line_to(x + MISSILE_STROKE_LENGTH, y);
    surface.stroke();
}

/// White disc at the explosion's current radius and opacity.
///
/// Every draw reports an [`SimEvent::Explosion`]: listeners hear about a
/// live explosion once per rendered frame, not once per hit.
pub fn draw_explosion(surface: &mut dyn Surface, explosion: &Explosion, events: &mut Vec<SimEvent>) {
    surface.set_fill_style(Rgba::white(explosion.opacity));
    surface.begin_path();
    surface.arc(
        explosion.position.x,
        explosion.position.y,
        explosion.radius,
        0.0,
        TAU,
    );
    surface.fill();
    events.push(SimEvent::Explosion);
}
