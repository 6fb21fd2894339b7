//! Entity spawn factories.
//!
//! Every factory allocates a fresh `EntityId` and spawns the full component
//! bundle for its entity kind. Systems decide where and when; these only
//! build the bundles.

use glam::Vec2;
use hecs::{Entity, World};

use holdout_core::components::*;
use holdout_core::config::EnemyType;
use holdout_core::enums::ItemKind;
use holdout_core::types::{EntityId, Position};
use holdout_director::ScaledStats;

/// Hand out the next stable id.
pub fn allocate_id(next_id: &mut u32) -> EntityId {
    let id = EntityId(*next_id);
    *next_id += 1;
    id
}

/// Spawn an enemy of `enemy_type` with Director-scaled stats.
pub fn spawn_enemy(
    world: &mut World,
    next_id: &mut u32,
    enemy_type: &EnemyType,
    stats: ScaledStats,
    position: Vec2,
) -> (Entity, EntityId) {
    let id = allocate_id(next_id);
    let enemy = Enemy {
        name: enemy_type.name.clone(),
        max_health: stats.health,
        health: stats.health,
        speed: stats.speed,
        damage: stats.damage,
        score_value: stats.score_value,
        radius: enemy_type.radius,
    };
    let entity = world.spawn((id, Position(position), enemy, ContactCooldown::default()));
    (entity, id)
}

pub fn spawn_projectile(
    world: &mut World,
    next_id: &mut u32,
    projectile: Projectile,
    position: Vec2,
) -> EntityId {
    let id = allocate_id(next_id);
    world.spawn((id, Position(position), projectile));
    id
}

pub fn spawn_item(world: &mut World, next_id: &mut u32, kind: ItemKind, position: Vec2) -> EntityId {
    let id = allocate_id(next_id);
    world.spawn((id, Position(position), Item { kind }));
    id
}

pub fn spawn_gem(world: &mut World, next_id: &mut u32, value: u32, position: Vec2) -> EntityId {
    let id = allocate_id(next_id);
    world.spawn((id, Position(position), XpGem { value }));
    id
}

pub fn spawn_chest(world: &mut World, next_id: &mut u32, position: Vec2) -> EntityId {
    let id = allocate_id(next_id);
    world.spawn((id, Position(position), Chest::default()));
    id
}
