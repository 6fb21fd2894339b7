//! Simulation engine for HOLDOUT.
//!
//! Owns the hecs ECS world (entity registries), the player, the gun and
//! the Director; runs systems in a fixed per-tick order and produces
//! GameStateSnapshots for the render/UI layer.

pub mod engine;
pub mod player;
pub mod progression;
pub mod systems;
pub mod weapon;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use holdout_core as core;
