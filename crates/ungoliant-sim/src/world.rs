//! Simulation state: every entity collection and timer, owned in one place.
//!
//! The scheduler owns exactly one `SimulationState` (through `Animation`)
//! and lends it to the systems by reference each frame.

use ungoliant_core::components::{Explosion, Missile, Particle, ParticleId, Player};

/// All mutable simulation state.
#[derive(Debug, Clone, Default)]
pub struct SimulationState {
    /// Live particles in spawn order. Order matters for target tie-breaks.
    pub particles: Vec<Particle>,
    pub missiles: Vec<Missile>,
    pub explosions: Vec<Explosion>,
    pub player: Player,

    /// Timestamp of the last formation spawn.
    pub last_formation_ms: f64,
    /// Timestamp of the last launch. Reset to zero by the burst check.
    pub last_fire_ms: f64,
    /// Launches since the last burst reset.
    pub shots_fired: u32,
    /// When set, the cooldown-bypass check runs on the first frame at or
    /// after this timestamp.
    pub burst_check_due_ms: Option<f64>,

    next_particle_id: u32,
}

impl SimulationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next particle identity.
    pub fn allocate_particle_id(&mut self) -> ParticleId {
        let id = ParticleId(self.next_particle_id);
        self.next_particle_id += 1;
        id
    }

    pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.iter().find(|p| p.id == id)
    }
}
