//! Player state. Owned by the engine, not an ECS entity.

use glam::Vec2;

use holdout_core::constants::*;
use holdout_core::enums::ItemKind;
use holdout_core::state::LevelUpView;

/// Attributes raised by level-ups.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerAttributes {
    pub max_health: f32,
    /// Units per second before item boosts.
    pub move_speed: f32,
    /// Flat damage added to every projectile.
    pub base_damage: f32,
    /// Percent chance for a projectile to deal double damage.
    pub crit_chance: f32,
}

impl Default for PlayerAttributes {
    fn default() -> Self {
        Self {
            max_health: MAX_PLAYER_HEALTH,
            move_speed: PLAYER_BASE_SPEED,
            base_damage: 0.0,
            crit_chance: PLAYER_BASE_CRIT_CHANCE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayerState {
    pub position: Vec2,
    pub radius: f32,
    pub health: f32,
    pub attributes: PlayerAttributes,
    pub xp: u32,
    pub level: u32,
    /// Accumulated from damage items; permanent for the run.
    pub damage_boost: f32,
    /// Accumulated from speed items; permanent for the run.
    pub speed_boost: f32,
    pub alive: bool,
    /// Latest movement intent from input, at most unit length.
    pub move_intent: Vec2,
    /// Set on level-up, taken by the next snapshot.
    pub last_level_up: Option<LevelUpView>,
}

impl Default for PlayerState {
    fn default() -> Self {
        let attributes = PlayerAttributes::default();
        Self {
            position: Vec2::ZERO,
            radius: PLAYER_RADIUS,
            health: attributes.max_health,
            attributes,
            xp: 0,
            level: 1,
            damage_boost: 0.0,
            speed_boost: 0.0,
            alive: true,
            move_intent: Vec2::ZERO,
            last_level_up: None,
        }
    }
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_speed(&self) -> f32 {
        self.attributes.move_speed + self.speed_boost
    }

    /// Damage of one projectile before the crit roll.
    pub fn hit_damage(&self) -> f32 {
        WEAPON_BASE_DAMAGE + self.attributes.base_damage + self.damage_boost
    }

    pub fn xp_needed(&self) -> u32 {
        xp_to_next_level(self.level)
    }

    /// Apply contact damage. Returns true only on the hit that kills.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        if !self.alive {
            return false;
        }
        self.health -= amount;
        if self.health <= 0.0 {
            self.alive = false;
            return true;
        }
        false
    }

    pub fn heal(&mut self, amount: f32) {
        self.health = (self.health + amount).min(self.attributes.max_health);
    }

    /// Apply an item's one-shot effect.
    pub fn apply_item(&mut self, kind: ItemKind) {
        match kind {
            ItemKind::Health => self.heal(ITEM_HEALTH_AMOUNT),
            ItemKind::Damage => self.damage_boost += ITEM_DAMAGE_BOOST,
            ItemKind::Speed => self.speed_boost += ITEM_SPEED_BOOST,
        }
    }
}
