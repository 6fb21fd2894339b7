//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level run state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation advancing normally.
    #[default]
    Active,
    /// Clock frozen; all cooldowns freeze with it.
    Paused,
    /// Player died. Terminal for the run.
    GameOver,
}

/// Difficulty phase reported by the Director.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyPhase {
    /// 0–3 minutes.
    #[default]
    Learning,
    /// 3–8 minutes.
    Early,
    /// 8–13 minutes.
    Mid,
    /// 13–18 minutes.
    Late,
    /// 18 minutes onward, saturating five minutes later.
    Endgame,
}

/// Pickup item category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// Restores health, capped at max health.
    Health,
    /// Permanent flat damage bonus for the run.
    Damage,
    /// Permanent flat move speed bonus for the run.
    Speed,
}

/// Player attribute raised by a level-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    MaxHealth,
    MoveSpeed,
    BaseDamage,
    CritChance,
}

/// Gun state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum WeaponState {
    /// Can fire while ammo remains.
    #[default]
    Ready,
    /// Refilling; completes `RELOAD_TIME` after `started_at`.
    Reloading { started_at: f64 },
}
