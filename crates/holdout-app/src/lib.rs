//! HOLDOUT headless runner.
//!
//! Wires the simulation engine to a paced game loop thread and an
//! autopilot input source, for smoke runs and balance checks.

pub mod autopilot;
pub mod game_loop;
pub mod state;

pub use holdout_core as core;
