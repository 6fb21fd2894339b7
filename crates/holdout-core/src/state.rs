//! Game state snapshot: the complete visible state handed to the
//! render/UI layer after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{EntityId, Position, SimTime};

/// Complete visible state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub hud: HudView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub items: Vec<ItemView>,
    pub gems: Vec<GemView>,
    pub chests: Vec<ChestView>,
    /// Events raised during this tick.
    pub events: Vec<GameEvent>,
    /// Level-up notification. Present only in the first snapshot after
    /// the level-up.
    pub last_level_up: Option<LevelUpView>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub radius: f32,
    pub alive: bool,
    pub move_speed: f32,
    pub base_damage: f32,
    /// Percent.
    pub crit_chance: f32,
    pub damage_boost: f32,
    pub speed_boost: f32,
}

/// Numbers the HUD polls once per tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub health: f32,
    pub max_health: f32,
    pub score: u64,
    pub elapsed_secs: f64,
    pub level: u32,
    pub xp: u32,
    pub xp_needed: u32,
    pub ammo: u32,
    pub max_ammo: u32,
    pub reloading: bool,
    pub difficulty: DifficultyPhase,
    pub enemies_per_spawn: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EntityId,
    pub name: String,
    pub position: Position,
    pub radius: f32,
    /// Clamped at zero for display.
    pub health: f32,
    pub max_health: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: EntityId,
    pub position: Position,
    pub direction: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemView {
    pub id: EntityId,
    pub kind: ItemKind,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GemView {
    pub id: EntityId,
    pub value: u32,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChestView {
    pub id: EntityId,
    pub position: Position,
    pub is_open: bool,
    pub bob_phase: f32,
}

/// Which attribute the last level-up raised, and by how much.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelUpView {
    pub level: u32,
    pub attribute: Attribute,
    pub amount: f32,
}
