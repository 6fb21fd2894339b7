//! Enemy pass: pursuit, contact damage and invalid-state removal, followed
//! by pairwise enemy separation.

use glam::Vec2;
use hecs::{Entity, World};

use holdout_core::components::{ContactCooldown, Enemy};
use holdout_core::constants::ENEMY_SEPARATION_STEP;
use holdout_core::events::GameEvent;
use holdout_core::types::{EntityId, Position};

use crate::player::PlayerState;

/// Move every enemy toward the player and apply contact damage.
///
/// Each enemy deals its damage at most once per `cooldown` seconds; an
/// enemy that never touched the player hits on first contact. Enemies with
/// a non-finite position are queued for removal.
///
/// Returns true if the player died this pass. The pass stops at the killing
/// hit.
pub fn run(
    world: &mut World,
    player: &mut PlayerState,
    now: f64,
    dt: f32,
    cooldown: f64,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) -> bool {
    let query = world.query_mut::<(&EntityId, &mut Position, &Enemy, &mut ContactCooldown)>();
    for (entity, (id, pos, enemy, contact)) in query {
        if !pos.is_finite() {
            log::warn!("enemy {} has invalid position {:?}, removing", id.0, pos.0);
            events.push(GameEvent::EntityDiscarded { id: *id });
            despawn_buffer.push(entity);
            continue;
        }

        let direction = (player.position - pos.0).normalize_or_zero();
        pos.0 += direction * enemy.speed * dt;

        let touching = pos.0.distance(player.position) < enemy.radius + player.radius;
        let ready = contact
            .last_hit_at
            .map_or(true, |last| now - last >= cooldown);
        if !touching || !ready {
            continue;
        }

        contact.last_hit_at = Some(now);
        let died = player.take_damage(enemy.damage);
        events.push(GameEvent::PlayerDamaged {
            amount: enemy.damage,
            health: player.health,
        });
        if died {
            log::debug!("player killed by {} {}", enemy.name, id.0);
            return true;
        }
    }
    false
}

/// Push overlapping enemy pairs apart by a fixed step.
///
/// Pushes are computed from the positions at the start of the pass and
/// applied afterwards, so the result doesn't depend on iteration order.
/// Exactly coincident pairs are split along the x axis.
pub fn separate(world: &mut World) {
    let enemies: Vec<(Entity, Vec2, f32)> = world
        .query::<(&Position, &Enemy)>()
        .iter()
        .map(|(entity, (pos, enemy))| (entity, pos.0, enemy.radius))
        .collect();

    let mut pushes = vec![Vec2::ZERO; enemies.len()];
    for (i, &(_, pos_a, radius_a)) in enemies.iter().enumerate() {
        for (j, &(_, pos_b, radius_b)) in enemies.iter().enumerate().skip(i + 1) {
            let threshold = radius_a + radius_b;
            let delta = pos_a - pos_b;
            let dist_sq = delta.length_squared();
            if dist_sq >= threshold * threshold {
                continue;
            }
            let away = if dist_sq > f32::EPSILON {
                delta / dist_sq.sqrt()
            } else {
                Vec2::X
            };
            pushes[i] += away * ENEMY_SEPARATION_STEP;
            pushes[j] -= away * ENEMY_SEPARATION_STEP;
        }
    }

    for ((entity, _, _), push) in enemies.into_iter().zip(pushes) {
        if push == Vec2::ZERO {
            continue;
        }
        if let Ok(mut pos) = world.get::<&mut Position>(entity) {
            pos.0 += push;
        }
    }
}
