//! Kill resolution and deferred removal.

use hecs::{Entity, World};

use holdout_core::components::Enemy;
use holdout_core::events::GameEvent;
use holdout_core::types::{EntityId, Position};

use crate::world_setup;

/// Drop an XP gem worth the enemy's score value at each killed enemy's
/// position, then queue the enemy for removal. Score is credited when the
/// gem is collected; enemies worth nothing drop no gem.
pub fn resolve_kills(
    world: &mut World,
    killed: &[Entity],
    next_id: &mut u32,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    for &entity in killed {
        let resolved = world
            .query_one_mut::<(&EntityId, &Position, &Enemy)>(entity)
            .ok()
            .map(|(id, pos, enemy)| (*id, *pos, enemy.score_value));
        let Some((id, position, score_value)) = resolved else {
            continue;
        };

        if score_value > 0 {
            world_setup::spawn_gem(world, next_id, score_value, position.0);
        }
        events.push(GameEvent::EnemyKilled {
            id,
            score_value,
            position,
        });
        despawn_buffer.push(entity);
    }
}

/// Despawn everything queued this tick.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
