//! Missile guidance: pure pursuit toward the target's current position,
//! proximity hit test and trail bookkeeping.

use glam::DVec2;

use ungoliant_core::components::{Explosion, Missile, Particle, TrailPoint};
use ungoliant_core::constants::*;

/// What happened to a missile during its step.
#[derive(Debug, Clone, Copy)]
pub enum MissileOutcome {
    /// Still flying.
    Tracking,
    /// The target no longer exists; the missile should be removed quietly.
    TargetLost,
    /// The target was destroyed; the missile should be removed and the
    /// explosion added.
    Impact(Explosion),
}

/// Advance one missile by one frame.
///
/// On impact the target is removed from `particles` here; the caller is
/// responsible for removing the missile.
pub fn step(missile: &mut Missile, particles: &mut Vec<Particle>) -> MissileOutcome {
    let Some(index) = particles.iter().position(|p| p.id == missile.target_id) else {
        return MissileOutcome::TargetLost;
    };

    let target = &particles[index];
    let to_target = target.position - missile.position;

    if to_target.length() < target.size + COLLISION_MARGIN {
        let explosion = Explosion::at(target.position);
        particles.remove(index);
        return MissileOutcome::Impact(explosion);
    }

    // atan2 is defined everywhere except a zero displacement, which the
    // hit test above rules out.
    let bearing = to_target.y.atan2(to_target.x);
    missile.position += DVec2::from_angle(bearing) * MISSILE_SPEED;
    record_trail(missile);

    MissileOutcome::Tracking
}

/// Prepend the current position, drop the oldest point past
/// `TRAIL_LENGTH`, then fade every point.
pub fn record_trail(missile: &mut Missile) {
    missile.trail.push_front(TrailPoint {
        position: missile.position,
        opacity: TRAIL_START_OPACITY,
    });
    missile.trail.truncate(TRAIL_LENGTH);
    for point in &mut missile.trail {
        point.opacity -= TRAIL_FADE_PER_FRAME;
    }
}
