//! Frame snapshot: the complete visible simulation state after a frame.

use serde::{Deserialize, Serialize};

use crate::components::{Explosion, Missile, Particle, Player};
use crate::types::{FrameTime, Viewport};

/// Serializable copy of everything the renderer would draw.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: FrameTime,
    pub viewport: Viewport,
    pub particles: Vec<Particle>,
    pub player: Player,
    pub missiles: Vec<Missile>,
    pub explosions: Vec<Explosion>,
    pub shots_fired: u32,
}

impl FrameSnapshot {
    /// Number of entities of every kind, player included.
    pub fn entity_count(&self) -> usize {
        self.particles.len() + self.missiles.len() + self.explosions.len() + 1
    }
}
