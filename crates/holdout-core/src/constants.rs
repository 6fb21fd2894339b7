//! Simulation constants and tuning parameters.
//!
//! Distances are ground-plane units, speeds are units per second and
//! timestamps are seconds on the simulation clock.

use crate::enums::{Attribute, ItemKind};

/// Nominal frame rate the simulation is tuned for (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per frame at the nominal frame rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- World bounds ---

/// Edge length of the square ground plane.
pub const GROUND_SIZE: f32 = 100.0;

/// Half the ground edge; valid positions satisfy `|x| < HALF` and `|y| < HALF`.
pub const GROUND_HALF_EXTENT: f32 = GROUND_SIZE / 2.0;

// --- Player ---

pub const PLAYER_RADIUS: f32 = 0.5;

/// Base movement speed (units/s).
pub const PLAYER_BASE_SPEED: f32 = 6.0;

pub const MAX_PLAYER_HEALTH: f32 = 100.0;

/// Critical hit chance a new run starts with (percent).
pub const PLAYER_BASE_CRIT_CHANCE: f32 = 5.0;

// --- Enemies ---

pub const ENEMY_RADIUS: f32 = 0.5;

/// Minimum spawn distance from the player.
pub const SPAWN_DISTANCE: f32 = 15.0;

/// Random extra distance added on top of `SPAWN_DISTANCE`, in `[0, JITTER)`.
pub const SPAWN_DISTANCE_JITTER: f32 = 5.0;

/// Placement attempts before an enemy spawn is abandoned.
pub const SPAWN_MAX_ATTEMPTS: u32 = 5;

/// Fixed push applied to each enemy of an overlapping pair, per tick.
pub const ENEMY_SEPARATION_STEP: f32 = 0.02;

/// Per-enemy contact damage cooldown (seconds).
pub const CONTACT_DAMAGE_COOLDOWN_SECS: f64 = 0.5;

// --- Weapon ---

pub const CLIP_SIZE: u32 = 6;

/// Reload duration measured from the reload start timestamp (seconds).
pub const RELOAD_TIME: f64 = 1.5;

/// Projectile speed (units/s).
pub const BULLET_SPEED: f32 = 18.0;

pub const BULLET_RADIUS: f32 = 0.1;

/// Projectiles further than this from their spawn point are removed.
pub const BULLET_MAX_DISTANCE: f32 = 30.0;

/// Damage of a single projectile before player attributes and boosts.
pub const WEAPON_BASE_DAMAGE: f32 = 10.0;

/// Distance from the player's centre at which projectiles appear.
pub const MUZZLE_OFFSET: f32 = PLAYER_RADIUS + BULLET_RADIUS + 0.1;

/// Aim vectors shorter than this (squared) are rejected.
pub const MIN_AIM_LENGTH_SQ: f32 = 1e-4;

// --- Pickups ---

/// Radius added to `PLAYER_RADIUS` for item and gem pickup.
pub const PICKUP_RADIUS: f32 = 0.3;

pub const ITEM_HEALTH_AMOUNT: f32 = 20.0;

pub const ITEM_DAMAGE_BOOST: f32 = 1.0;

/// Flat speed bonus from a speed item (5% of base speed).
pub const ITEM_SPEED_BOOST: f32 = PLAYER_BASE_SPEED * 0.05;

/// Per-tick probability of a loose item dropping near the player.
pub const LOOSE_ITEM_CHANCE: f64 = 0.0002;

pub const LOOSE_ITEM_MIN_DISTANCE: f32 = 3.0;
pub const LOOSE_ITEM_MAX_DISTANCE: f32 = 6.0;

// --- Chests ---

pub const CHEST_INTERVAL_SECS: f64 = 60.0;
pub const CHEST_MIN_DISTANCE: f32 = 5.0;
pub const CHEST_MAX_DISTANCE: f32 = 8.0;

/// Player distance at which a closed chest opens.
pub const CHEST_OPEN_RADIUS: f32 = 1.5;

/// Time an opened chest lingers (inert) before removal.
pub const CHEST_DESPAWN_DELAY_SECS: f64 = 1.0;

/// Bob animation speed (radians/s).
pub const CHEST_BOB_RATE: f32 = 2.0;

/// Rewards a chest can grant; one is picked uniformly on open.
pub const CHEST_OPTIONS: [ItemKind; 3] = [ItemKind::Health, ItemKind::Damage, ItemKind::Speed];

// --- Progression ---

pub const XP_BASE: u32 = 100;
pub const XP_PER_LEVEL: u32 = 20;

/// Level-up reward table; one entry is picked uniformly per level.
pub const LEVEL_UP_REWARDS: [Attribute; 4] = [
    Attribute::MaxHealth,
    Attribute::MoveSpeed,
    Attribute::BaseDamage,
    Attribute::CritChance,
];

pub const LEVEL_UP_MAX_HEALTH: f32 = 5.0;

/// Move speed gained per level-up (1% of base).
pub const LEVEL_UP_MOVE_SPEED: f32 = PLAYER_BASE_SPEED * 0.01;

pub const LEVEL_UP_BASE_DAMAGE: f32 = 1.0;

/// Crit chance gained per level-up (percentage points).
pub const LEVEL_UP_CRIT_CHANCE: f32 = 1.0;

/// XP required to advance from `level` to `level + 1`.
pub fn xp_to_next_level(level: u32) -> u32 {
    XP_BASE + level * XP_PER_LEVEL
}
