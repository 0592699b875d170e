//! Headless host for the shooter-vs-targets animation.
//!
//! This crate drives the simulation scheduler from a frame thread, folds
//! its notifications into the cost counters, and tracks which narrative
//! section the page is showing.

pub mod config;
pub mod dump;
pub mod host_loop;
pub mod ledger;
pub mod narrative;
pub mod state;

pub use ungoliant_core as core;
