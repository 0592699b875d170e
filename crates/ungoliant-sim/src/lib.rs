//! Animation engine for the UNGOLIANT landing page background.
//!
//! Owns the simulation state, steps and renders it once per frame, and
//! publishes launch/explosion notifications for the surrounding UI.

pub mod bridge;
pub mod engine;
pub mod render;
pub mod scheduler;
pub mod systems;
pub mod world;

pub use engine::Animation;
pub use scheduler::Scheduler;
pub use ungoliant_core as core;
