//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components. Every entity also carries
//! a `Position` and an `EntityId` from `types`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::ItemKind;

/// A hostile walker. Stats are already scaled by the Director at spawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Archetype name from the enemy type table.
    pub name: String,
    pub max_health: f32,
    /// Raw health; may go negative on the killing hit.
    pub health: f32,
    /// Units per second.
    pub speed: f32,
    pub damage: f32,
    pub score_value: u32,
    pub radius: f32,
}

/// Per-enemy contact damage timer.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ContactCooldown {
    /// Timestamp of the last hit on the player. `None` until first contact.
    pub last_hit_at: Option<f64>,
}

/// A bullet fired by the player's gun.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Unit vector, fixed for the projectile's lifetime.
    pub direction: Vec2,
    /// Where the shot originated; travel is measured from here.
    pub spawn: Vec2,
}

/// A one-shot pickup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Item {
    pub kind: ItemKind,
}

/// Experience dropped by a killed enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct XpGem {
    pub value: u32,
}

/// A reward chest.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Chest {
    pub is_open: bool,
    /// Timestamp of opening; the chest is removed a fixed delay later.
    pub opened_at: Option<f64>,
    /// Bob animation phase (radians).
    pub bob_phase: f32,
}
