//! Projectile flight and hits.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use holdout_core::components::{Enemy, Projectile};
use holdout_core::constants::*;
use holdout_core::events::GameEvent;
use holdout_core::types::{EntityId, Position};

use crate::player::PlayerState;

/// Advance projectiles, resolve hits and return the enemies killed this
/// tick (each at most once).
///
/// A projectile hits the first enemy in registry order it overlaps and is
/// consumed. Projectiles past `BULLET_MAX_DISTANCE` from their spawn point
/// are removed. An enemy already at zero health still absorbs projectiles
/// until the kill is resolved.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    player: &PlayerState,
    dt: f32,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) -> Vec<Entity> {
    let enemies: Vec<(Entity, Vec2, f32)> = world
        .query::<(&Position, &Enemy)>()
        .iter()
        .map(|(entity, (pos, enemy))| (entity, pos.0, enemy.radius))
        .collect();

    let mut hits: Vec<Entity> = Vec::new();
    for (entity, (pos, projectile)) in world.query_mut::<(&mut Position, &Projectile)>() {
        pos.0 += projectile.direction * BULLET_SPEED * dt;

        if pos.0.distance(projectile.spawn) > BULLET_MAX_DISTANCE {
            despawn_buffer.push(entity);
            continue;
        }

        let target = enemies
            .iter()
            .find(|(_, enemy_pos, radius)| pos.0.distance(*enemy_pos) < BULLET_RADIUS + radius);
        if let Some(&(enemy, _, _)) = target {
            hits.push(enemy);
            despawn_buffer.push(entity);
        }
    }

    let base_damage = player.hit_damage();
    let crit_chance = player.attributes.crit_chance;
    let mut killed: Vec<Entity> = Vec::new();

    for enemy_entity in hits {
        let Ok((id, pos, enemy)) =
            world.query_one_mut::<(&EntityId, &Position, &mut Enemy)>(enemy_entity)
        else {
            continue;
        };

        let critical = rng.gen_range(0.0..100.0) < crit_chance;
        let amount = if critical { base_damage * 2.0 } else { base_damage };
        enemy.health -= amount;
        log::trace!("enemy {} hit for {amount} (crit: {critical})", id.0);

        events.push(GameEvent::DamageDealt {
            id: *id,
            amount,
            critical,
            position: *pos,
        });

        if enemy.health <= 0.0 && !killed.contains(&enemy_entity) {
            killed.push(enemy_entity);
        }
    }

    killed
}
