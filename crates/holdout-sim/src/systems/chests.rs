//! Chest lifecycle: bob animation, opening on proximity and removal after
//! the linger delay.

use glam::Vec2;
use hecs::{Entity, World};
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use holdout_core::components::Chest;
use holdout_core::constants::*;
use holdout_core::events::GameEvent;
use holdout_core::types::{EntityId, Position};

use crate::world_setup;

/// Advance every chest. A closed chest within `CHEST_OPEN_RADIUS` of the
/// player opens and drops one reward item where it stands; an open chest
/// is queued for removal `CHEST_DESPAWN_DELAY_SECS` after opening.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    player_pos: Vec2,
    now: f64,
    dt: f32,
    next_id: &mut u32,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let mut opened: Vec<(EntityId, Vec2)> = Vec::new();

    for (entity, (id, pos, chest)) in world.query_mut::<(&EntityId, &Position, &mut Chest)>() {
        chest.bob_phase = (chest.bob_phase + CHEST_BOB_RATE * dt) % std::f32::consts::TAU;

        match chest.opened_at {
            None => {
                if pos.0.distance(player_pos) < CHEST_OPEN_RADIUS {
                    chest.is_open = true;
                    chest.opened_at = Some(now);
                    opened.push((*id, pos.0));
                }
            }
            Some(opened_at) => {
                if now - opened_at >= CHEST_DESPAWN_DELAY_SECS {
                    despawn_buffer.push(entity);
                }
            }
        }
    }

    for (id, position) in opened {
        let Some(&reward) = CHEST_OPTIONS.choose(rng) else {
            continue;
        };
        log::info!("chest {} opened: {reward:?}", id.0);
        events.push(GameEvent::ChestOpened { id, reward });
        let item_id = world_setup::spawn_item(world, next_id, reward, position);
        events.push(GameEvent::ItemSpawned {
            id: item_id,
            kind: reward,
        });
    }
}
