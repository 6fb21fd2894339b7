//! Difficulty Director for HOLDOUT.
//!
//! Maps cumulative run time to spawn cadence, group size and an enemy
//! stat multiplier. Pure data in, pure data out; no ECS dependency.

pub mod curve;
pub mod director;

pub use director::{Director, ScaledStats};
pub use holdout_core as core;

#[cfg(test)]
mod tests;
