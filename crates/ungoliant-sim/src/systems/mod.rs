//! Per-frame systems operating on the simulation state.
//!
//! Systems are plain functions over borrowed state. They do not own
//! anything; all state lives in `SimulationState`.

pub mod explosion;
pub mod fire_control;
pub mod guidance;
pub mod particle_motion;
pub mod player_orbit;
pub mod spawner;
