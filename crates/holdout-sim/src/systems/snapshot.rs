//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world. Entity lists are
//! sorted by id so consecutive snapshots line up for the renderer.

use hecs::World;

use holdout_core::components::*;
use holdout_core::enums::GamePhase;
use holdout_core::events::GameEvent;
use holdout_core::state::*;
use holdout_core::types::{EntityId, Position, SimTime};
use holdout_director::Director;

use crate::player::PlayerState;
use crate::weapon::Gun;

/// Engine-owned state the snapshot reads besides the world.
pub struct SnapshotContext<'a> {
    pub time: &'a SimTime,
    pub phase: GamePhase,
    pub player: &'a PlayerState,
    pub gun: &'a Gun,
    pub director: &'a Director,
    pub score: u64,
}

pub fn build_snapshot(
    world: &World,
    ctx: SnapshotContext<'_>,
    events: Vec<GameEvent>,
    last_level_up: Option<LevelUpView>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *ctx.time,
        phase: ctx.phase,
        player: build_player(ctx.player),
        hud: build_hud(&ctx),
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        items: build_items(world),
        gems: build_gems(world),
        chests: build_chests(world),
        events,
        last_level_up,
    }
}

fn build_player(player: &PlayerState) -> PlayerView {
    PlayerView {
        position: Position(player.position),
        radius: player.radius,
        alive: player.alive,
        move_speed: player.current_speed(),
        base_damage: player.attributes.base_damage,
        crit_chance: player.attributes.crit_chance,
        damage_boost: player.damage_boost,
        speed_boost: player.speed_boost,
    }
}

fn build_hud(ctx: &SnapshotContext<'_>) -> HudView {
    let player = ctx.player;
    HudView {
        health: player.health.max(0.0),
        max_health: player.attributes.max_health,
        score: ctx.score,
        elapsed_secs: ctx.time.elapsed_secs,
        level: player.level,
        xp: player.xp,
        xp_needed: player.xp_needed(),
        ammo: ctx.gun.ammo(),
        max_ammo: ctx.gun.max_ammo(),
        reloading: ctx.gun.is_reloading(),
        difficulty: ctx.director.phase(),
        enemies_per_spawn: ctx.director.enemies_per_spawn(),
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&EntityId, &Position, &Enemy)>()
        .iter()
        .map(|(_, (id, pos, enemy))| EnemyView {
            id: *id,
            name: enemy.name.clone(),
            position: *pos,
            radius: enemy.radius,
            health: enemy.health.max(0.0),
            max_health: enemy.max_health,
        })
        .collect();
    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&EntityId, &Position, &Projectile)>()
        .iter()
        .map(|(_, (id, pos, projectile))| ProjectileView {
            id: *id,
            position: *pos,
            direction: Position(projectile.direction),
        })
        .collect();
    projectiles.sort_by_key(|p| p.id);
    projectiles
}

fn build_items(world: &World) -> Vec<ItemView> {
    let mut items: Vec<ItemView> = world
        .query::<(&EntityId, &Position, &Item)>()
        .iter()
        .map(|(_, (id, pos, item))| ItemView {
            id: *id,
            kind: item.kind,
            position: *pos,
        })
        .collect();
    items.sort_by_key(|i| i.id);
    items
}

fn build_gems(world: &World) -> Vec<GemView> {
    let mut gems: Vec<GemView> = world
        .query::<(&EntityId, &Position, &XpGem)>()
        .iter()
        .map(|(_, (id, pos, gem))| GemView {
            id: *id,
            value: gem.value,
            position: *pos,
        })
        .collect();
    gems.sort_by_key(|g| g.id);
    gems
}

fn build_chests(world: &World) -> Vec<ChestView> {
    let mut chests: Vec<ChestView> = world
        .query::<(&EntityId, &Position, &Chest)>()
        .iter()
        .map(|(_, (id, pos, chest))| ChestView {
            id: *id,
            position: *pos,
            is_open: chest.is_open,
            bob_phase: chest.bob_phase,
        })
        .collect();
    chests.sort_by_key(|c| c.id);
    chests
}
