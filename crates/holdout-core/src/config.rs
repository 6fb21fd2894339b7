//! Data-driven tunables: enemy roster and the knobs that differ between
//! balance passes.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;
use crate::types::GroundBounds;

/// Base stats for one enemy archetype, before Director scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyType {
    pub name: String,
    pub health: f32,
    /// Units per second.
    pub speed: f32,
    /// Contact damage per hit.
    pub damage: f32,
    pub score_value: u32,
    #[serde(default = "default_enemy_radius")]
    pub radius: f32,
}

fn default_enemy_radius() -> f32 {
    ENEMY_RADIUS
}

impl EnemyType {
    pub fn new(name: &str, health: f32, speed: f32, damage: f32, score_value: u32) -> Self {
        Self {
            name: name.to_string(),
            health,
            speed,
            damage,
            score_value,
            radius: ENEMY_RADIUS,
        }
    }

    /// Reject stats that would produce an enemy that can't be killed,
    /// can't be placed, or corrupts positions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason| ConfigError::InvalidEnemyType {
            name: self.name.clone(),
            reason,
        };
        if self.name.is_empty() {
            return Err(invalid("name is empty"));
        }
        if !(self.health.is_finite() && self.health > 0.0) {
            return Err(invalid("health must be positive"));
        }
        if !(self.speed.is_finite() && self.speed >= 0.0) {
            return Err(invalid("speed must be non-negative"));
        }
        if !(self.damage.is_finite() && self.damage >= 0.0) {
            return Err(invalid("damage must be non-negative"));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(invalid("radius must be positive"));
        }
        Ok(())
    }
}

/// The three stock archetypes.
pub fn default_enemy_types() -> Vec<EnemyType> {
    vec![
        EnemyType::new("basic", 10.0, 1.8, 10.0, 10),
        EnemyType::new("fast", 5.0, 3.0, 5.0, 15),
        EnemyType::new("tank", 20.0, 1.2, 15.0, 20),
    ]
}

/// Balance knobs loaded at startup. Missing fields fall back to the
/// defaults in `constants`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tunables {
    pub ground_half_extent: f32,
    pub contact_cooldown_secs: f64,
    pub chest_interval_secs: f64,
    pub loose_item_chance: f64,
    pub clip_size: u32,
    pub enemy_types: Vec<EnemyType>,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            ground_half_extent: GROUND_HALF_EXTENT,
            contact_cooldown_secs: CONTACT_DAMAGE_COOLDOWN_SECS,
            chest_interval_secs: CHEST_INTERVAL_SECS,
            loose_item_chance: LOOSE_ITEM_CHANCE,
            clip_size: CLIP_SIZE,
            enemy_types: default_enemy_types(),
        }
    }
}

impl Tunables {
    /// Parse tunables from JSON and validate them.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let tunables: Tunables = serde_json::from_str(json)?;
        tunables.validate()?;
        Ok(tunables)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.enemy_types.is_empty() {
            return Err(ConfigError::EmptyEnemyTable);
        }
        for enemy_type in &self.enemy_types {
            enemy_type.validate()?;
        }
        if self.clip_size == 0 {
            return Err(ConfigError::InvalidClipSize(self.clip_size));
        }
        check_range(
            "ground_half_extent",
            "positive",
            self.ground_half_extent as f64,
            |v| v > 0.0,
        )?;
        check_range(
            "contact_cooldown_secs",
            "positive",
            self.contact_cooldown_secs,
            |v| v > 0.0,
        )?;
        check_range(
            "chest_interval_secs",
            "positive",
            self.chest_interval_secs,
            |v| v > 0.0,
        )?;
        check_range(
            "loose_item_chance",
            "within [0, 1]",
            self.loose_item_chance,
            |v| (0.0..=1.0).contains(&v),
        )?;
        Ok(())
    }

    pub fn ground(&self) -> GroundBounds {
        GroundBounds::new(self.ground_half_extent)
    }
}

fn check_range(
    field: &'static str,
    expected: &'static str,
    value: f64,
    ok: impl Fn(f64) -> bool,
) -> Result<(), ConfigError> {
    if value.is_finite() && ok(value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            expected,
            value,
        })
    }
}
