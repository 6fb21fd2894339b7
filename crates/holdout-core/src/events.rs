//! Events emitted by the simulation for presentation and audio feedback.
//!
//! The core owns no presentation timing: flashes, floating numbers and
//! sounds are driven by the external layer reacting to these.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{EntityId, Position};

/// Discrete things that happened during a tick, in the order they happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    EnemySpawned { id: EntityId, name: String },
    /// A projectile hit an enemy.
    DamageDealt {
        id: EntityId,
        amount: f32,
        critical: bool,
        position: Position,
    },
    EnemyKilled {
        id: EntityId,
        score_value: u32,
        position: Position,
    },
    /// An enemy touched the player.
    PlayerDamaged { amount: f32, health: f32 },
    /// Gun fired (audio trigger).
    Shot,
    ReloadStarted,
    ReloadComplete,
    ItemSpawned { id: EntityId, kind: ItemKind },
    ItemPickedUp { kind: ItemKind },
    GemCollected { value: u32 },
    ChestSpawned { id: EntityId },
    ChestOpened { id: EntityId, reward: ItemKind },
    LevelUp { level: u32, attribute: Attribute },
    /// Entity removed because its state became invalid.
    EntityDiscarded { id: EntityId },
    GameOver { score: u64, elapsed_secs: f64 },
}
