//! Spawn system: Director-paced enemy waves, periodic chests and rare
//! loose items around the player.

use std::f32::consts::TAU;

use glam::Vec2;
use hecs::World;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use holdout_core::config::Tunables;
use holdout_core::constants::*;
use holdout_core::events::GameEvent;
use holdout_core::types::GroundBounds;
use holdout_director::Director;

use crate::world_setup;

/// Timestamps of the last enemy wave and the last chest.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnTimers {
    pub last_enemy_spawn: f64,
    pub last_chest_spawn: f64,
}

/// Run all spawners for this tick.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    director: &Director,
    tunables: &Tunables,
    timers: &mut SpawnTimers,
    player_pos: Vec2,
    now: f64,
    next_id: &mut u32,
    events: &mut Vec<GameEvent>,
) {
    if director.should_spawn(now, timers.last_enemy_spawn) {
        for _ in 0..director.enemies_per_spawn() {
            spawn_enemy_near(world, rng, director, tunables, player_pos, next_id, events);
        }
        timers.last_enemy_spawn = now;
    }

    if now - timers.last_chest_spawn >= tunables.chest_interval_secs {
        spawn_chest_near(world, rng, &tunables.ground(), player_pos, next_id, events);
        timers.last_chest_spawn = now;
    }

    if tunables.loose_item_chance > 0.0 && rng.gen_bool(tunables.loose_item_chance) {
        spawn_loose_item(world, rng, &tunables.ground(), player_pos, next_id, events);
    }
}

/// Spawn one enemy on the ring around the player. Gives up quietly after
/// `SPAWN_MAX_ATTEMPTS` placements outside the ground.
pub fn spawn_enemy_near(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    director: &Director,
    tunables: &Tunables,
    player_pos: Vec2,
    next_id: &mut u32,
    events: &mut Vec<GameEvent>,
) -> Option<hecs::Entity> {
    let Some(position) = find_spawn_position(rng, player_pos, &tunables.ground()) else {
        log::debug!("enemy spawn abandoned after {SPAWN_MAX_ATTEMPTS} attempts near {player_pos}");
        return None;
    };

    let enemy_type = tunables.enemy_types.choose(rng)?;
    let stats = director.enemy_stats(enemy_type);
    let (entity, id) = world_setup::spawn_enemy(world, next_id, enemy_type, stats, position);
    events.push(GameEvent::EnemySpawned {
        id,
        name: enemy_type.name.clone(),
    });
    Some(entity)
}

/// Sample a point `SPAWN_DISTANCE + [0, JITTER)` from the player, accepting
/// the first one strictly inside the ground.
pub fn find_spawn_position(
    rng: &mut ChaCha8Rng,
    player_pos: Vec2,
    ground: &GroundBounds,
) -> Option<Vec2> {
    (0..SPAWN_MAX_ATTEMPTS).find_map(|_| {
        let angle = rng.gen_range(0.0..TAU);
        let distance = SPAWN_DISTANCE + rng.gen_range(0.0..SPAWN_DISTANCE_JITTER);
        let candidate = player_pos + Vec2::from_angle(angle) * distance;
        ground.contains(candidate).then_some(candidate)
    })
}

fn spawn_chest_near(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    ground: &GroundBounds,
    player_pos: Vec2,
    next_id: &mut u32,
    events: &mut Vec<GameEvent>,
) {
    let position = ground.clamp(point_around(
        rng,
        player_pos,
        CHEST_MIN_DISTANCE,
        CHEST_MAX_DISTANCE,
    ));
    let id = world_setup::spawn_chest(world, next_id, position);
    log::debug!("chest {} spawned at {position}", id.0);
    events.push(GameEvent::ChestSpawned { id });
}

fn spawn_loose_item(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    ground: &GroundBounds,
    player_pos: Vec2,
    next_id: &mut u32,
    events: &mut Vec<GameEvent>,
) {
    let Some(&kind) = CHEST_OPTIONS.choose(rng) else {
        return;
    };
    let position = point_around(rng, player_pos, LOOSE_ITEM_MIN_DISTANCE, LOOSE_ITEM_MAX_DISTANCE);
    let id = world_setup::spawn_item(world, next_id, kind, ground.clamp(position));
    events.push(GameEvent::ItemSpawned { id, kind });
}

fn point_around(rng: &mut ChaCha8Rng, center: Vec2, min_distance: f32, max_distance: f32) -> Vec2 {
    let angle = rng.gen_range(0.0..TAU);
    let distance = rng.gen_range(min_distance..max_distance);
    center + Vec2::from_angle(angle) * distance
}
