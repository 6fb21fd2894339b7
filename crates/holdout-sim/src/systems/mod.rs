//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` plus the engine-owned state
//! they need. Removals go through a despawn buffer so no system mutates the
//! registries it is iterating.

pub mod chests;
pub mod cleanup;
pub mod collision;
pub mod movement;
pub mod pickups;
pub mod projectiles;
pub mod snapshot;
pub mod spawner;
