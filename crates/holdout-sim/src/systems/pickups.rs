//! Item and XP gem pickup.

use hecs::{Entity, World};

use holdout_core::components::{Item, XpGem};
use holdout_core::constants::PICKUP_RADIUS;
use holdout_core::events::GameEvent;
use holdout_core::types::Position;

use crate::player::PlayerState;

fn in_reach(player: &PlayerState, pos: &Position) -> bool {
    pos.0.distance(player.position) < player.radius + PICKUP_RADIUS
}

/// Apply and consume every item the player is touching.
pub fn run_items(
    world: &mut World,
    player: &mut PlayerState,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    for (entity, (pos, item)) in world.query_mut::<(&Position, &Item)>() {
        if !in_reach(player, pos) {
            continue;
        }
        player.apply_item(item.kind);
        events.push(GameEvent::ItemPickedUp { kind: item.kind });
        despawn_buffer.push(entity);
    }
}

/// Collect every gem the player is touching. The value is credited to both
/// XP and score; the level-up check runs once afterwards.
pub fn run_gems(
    world: &mut World,
    player: &mut PlayerState,
    score: &mut u64,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    for (entity, (pos, gem)) in world.query_mut::<(&Position, &XpGem)>() {
        if !in_reach(player, pos) {
            continue;
        }
        player.xp += gem.value;
        *score += gem.value as u64;
        events.push(GameEvent::GemCollected { value: gem.value });
        despawn_buffer.push(entity);
    }
}
