//! Animation engine: one full update/render iteration per frame.
//!
//! `Animation` owns the `SimulationState`, the seeded RNG and the current
//! viewport. It is headless: drawing goes to whatever [`Surface`] the
//! caller passes in, and notifications are buffered until the caller
//! takes them, which keeps listener code out of the simulation step.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use ungoliant_core::events::SimEvent;
use ungoliant_core::state::FrameSnapshot;
use ungoliant_core::surface::Surface;
use ungoliant_core::types::{FrameTime, Viewport};

use crate::render;
use crate::systems;
use crate::systems::guidance::MissileOutcome;
use crate::world::SimulationState;

/// Configuration for a new animation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same frames.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The animation. Owns all simulation state.
pub struct Animation {
    state: SimulationState,
    viewport: Viewport,
    time: FrameTime,
    rng: ChaCha8Rng,
    events: Vec<SimEvent>,
}

impl Animation {
    pub fn new(config: SimConfig, viewport: Viewport) -> Self {
        Self {
            state: SimulationState::new(),
            viewport,
            time: FrameTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            events: Vec::new(),
        }
    }

    /// Run one frame at `timestamp_ms` (milliseconds since the loop started).
    ///
    /// Order: background wash, burst check, formation spawn, particles,
    /// player, fire control, missiles (drawn before they move), explosions
    /// (drawn before they grow and fade).
    pub fn frame(&mut self, timestamp_ms: f64, surface: &mut dyn Surface) {
        let viewport = self.viewport;
        let state = &mut self.state;

        render::fade_background(surface, &viewport);

        systems::fire_control::run_burst_check(state, &viewport, timestamp_ms);
        systems::spawner::run(state, &mut self.rng, &viewport, timestamp_ms);

        for particle in &mut state.particles {
            systems::particle_motion::step(particle, &mut self.rng, &viewport);
            render::draw_particle(surface, particle);
        }

        systems::player_orbit::step(&mut state.player, &viewport);
        render::draw_player(surface, &state.player);

        systems::fire_control::run(state, &viewport, timestamp_ms, &mut self.events);

        let mut index = 0;
        while index < state.missiles.len() {
            render::draw_missile(surface, &state.missiles[index]);
            match systems::guidance::step(&mut state.missiles[index], &mut state.particles) {
                MissileOutcome::Tracking => index += 1,
                MissileOutcome::TargetLost => {
                    state.missiles.remove(index);
                }
                MissileOutcome::Impact(explosion) => {
                    state.missiles.remove(index);
                    state.explosions.push(explosion);
                }
            }
        }

        let events = &mut self.events;
        state.explosions.retain_mut(|explosion| {
            render::draw_explosion(surface, explosion, events);
            systems::explosion::step(explosion)
        });

        self.time.advance(timestamp_ms);
    }

    /// Take the notifications emitted since the last call, in emission order.
    pub fn take_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    /// Adopt new surface dimensions. Live entities keep their positions;
    /// wrap logic and the next formation pick up the new size.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn time(&self) -> FrameTime {
        self.time
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Mutable access for hosts and tests that need to stage a scene.
    pub fn state_mut(&mut self) -> &mut SimulationState {
        &mut self.state
    }

    /// Copy the visible state into a serializable snapshot.
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            time: self.time,
            viewport: self.viewport,
            particles: self.state.particles.clone(),
            player: self.state.player.clone(),
            missiles: self.state.missiles.clone(),
            explosions: self.state.explosions.clone(),
            shots_fired: self.state.shots_fired,
        }
    }
}
