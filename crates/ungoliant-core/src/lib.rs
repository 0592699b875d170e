//! Core types and definitions for the UNGOLIANT background animation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! entity records, constants, notifications, snapshots and the drawing
//! surface contract. It has no dependency on any runtime or windowing layer.

pub mod components;
pub mod constants;
pub mod events;
pub mod state;
pub mod surface;
pub mod types;
