//! Explosion lifecycle: grow and fade each frame.

use ungoliant_core::components::Explosion;
use ungoliant_core::constants::{EXPLOSION_FADE_PER_FRAME, EXPLOSION_GROWTH_PER_FRAME};

/// Grow and fade one explosion. Returns false once it has fully faded.
pub fn step(explosion: &mut Explosion) -> bool {
    explosion.radius += EXPLOSION_GROWTH_PER_FRAME;
    explosion.opacity -= EXPLOSION_FADE_PER_FRAME;
    explosion.opacity > 0.0
}
