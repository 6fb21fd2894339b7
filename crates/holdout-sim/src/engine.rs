//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, the player, the gun, the
//! Director and the RNG. It processes player commands, runs all systems in
//! a fixed order and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use holdout_core::commands::PlayerCommand;
use holdout_core::config::Tunables;
use holdout_core::enums::GamePhase;
use holdout_core::error::ConfigError;
use holdout_core::events::GameEvent;
use holdout_core::state::GameStateSnapshot;
use holdout_core::types::SimTime;
use holdout_director::Director;

use crate::player::PlayerState;
use crate::progression;
use crate::systems;
use crate::systems::snapshot::SnapshotContext;
use crate::systems::spawner::SpawnTimers;
use crate::weapon::Gun;
use crate::world_setup;

/// Configuration for starting a new run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub tunables: Tunables,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tunables: Tunables::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    tunables: Tunables,
    director: Director,
    player: PlayerState,
    gun: Gun,
    score: u64,
    spawn_timers: SpawnTimers,
    next_entity_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    pending_shots: Vec<Vec2>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new run. Tunables are validated before anything is built.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.tunables.validate()?;
        let gun = Gun::new(config.tunables.clip_size)?;

        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            tunables: config.tunables,
            director: Director::new(),
            player: PlayerState::new(),
            gun,
            score: 0,
            spawn_timers: SpawnTimers::default(),
            next_entity_id: 0,
            command_queue: VecDeque::new(),
            pending_shots: Vec::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt` seconds and return the resulting
    /// snapshot. Paused and finished runs still produce a snapshot but do
    /// not advance.
    pub fn tick(&mut self, dt: f64) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems(dt);
        } else {
            self.pending_shots.clear();
        }

        let events = std::mem::take(&mut self.events);
        let last_level_up = self.player.last_level_up.take();
        systems::snapshot::build_snapshot(
            &self.world,
            SnapshotContext {
                time: &self.time,
                phase: self.phase,
                player: &self.player,
                gun: &self.gun,
                director: &self.director,
                score: self.score,
            },
            events,
            last_level_up,
        )
    }

    /// Fire immediately toward `aim`. Returns false when the run isn't
    /// active, the gun can't fire, or `aim` has no usable direction.
    pub fn try_shoot(&mut self, aim: Vec2) -> bool {
        if self.phase != GamePhase::Active || !self.player.alive {
            return false;
        }

        let now = self.time.elapsed_secs;
        let Some(shot) = self.gun.try_shoot(now, self.player.position, aim) else {
            return false;
        };

        world_setup::spawn_projectile(
            &mut self.world,
            &mut self.next_entity_id,
            shot.projectile,
            shot.position,
        );
        log::trace!("shot fired, {} rounds left", self.gun.ammo());
        self.events.push(GameEvent::Shot);
        if shot.reload_started {
            log::trace!("reload started at {now:.2}s");
            self.events.push(GameEvent::ReloadStarted);
        }
        true
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn gun(&self) -> &Gun {
        &self.gun
    }

    pub fn director(&self) -> &Director {
        &self.director
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn tunables(&self) -> &Tunables {
        &self.tunables
    }

    /// Stop the spawners so tests control every entity.
    #[cfg(test)]
    pub fn suppress_spawning(&mut self) {
        self.spawn_timers.last_enemy_spawn = f64::INFINITY;
        self.spawn_timers.last_chest_spawn = f64::INFINITY;
        self.tunables.loose_item_chance = 0.0;
    }

    /// Spawn an enemy of the named type at `position` with the Director's
    /// current scaling (for testing).
    #[cfg(test)]
    pub fn spawn_test_enemy(&mut self, name: &str, position: Vec2) -> hecs::Entity {
        let enemy_type = self
            .tunables
            .enemy_types
            .iter()
            .find(|t| t.name == name)
            .cloned()
            .unwrap_or_else(|| panic!("unknown enemy type {name}"));
        let stats = self.director.enemy_stats(&enemy_type);
        world_setup::spawn_enemy(
            &mut self.world,
            &mut self.next_entity_id,
            &enemy_type,
            stats,
            position,
        )
        .0
    }

    #[cfg(test)]
    pub fn spawn_test_item(&mut self, kind: holdout_core::enums::ItemKind, position: Vec2) {
        world_setup::spawn_item(&mut self.world, &mut self.next_entity_id, kind, position);
    }

    #[cfg(test)]
    pub fn spawn_test_gem(&mut self, value: u32, position: Vec2) {
        world_setup::spawn_gem(&mut self.world, &mut self.next_entity_id, value, position);
    }

    #[cfg(test)]
    pub fn spawn_test_chest(&mut self, position: Vec2) {
        world_setup::spawn_chest(&mut self.world, &mut self.next_entity_id, position);
    }

    /// Try to spawn one enemy through the regular placement path.
    #[cfg(test)]
    pub fn spawn_enemy_near_player(&mut self) -> Option<hecs::Entity> {
        systems::spawner::spawn_enemy_near(
            &mut self.world,
            &mut self.rng,
            &self.director,
            &self.tunables,
            self.player.position,
            &mut self.next_entity_id,
            &mut self.events,
        )
    }

    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SetMoveIntent { x, y } => {
                let intent = Vec2::new(x, y);
                self.player.move_intent = if intent.is_finite() {
                    intent.clamp_length_max(1.0)
                } else {
                    Vec2::ZERO
                };
            }
            PlayerCommand::Fire { aim_x, aim_y } => {
                self.pending_shots.push(Vec2::new(aim_x, aim_y));
            }
            PlayerCommand::SetClipSize { size } => {
                if let Err(err) = self.gun.update_clip_size(size) {
                    log::warn!("rejected clip size change: {err}");
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
        }
    }

    /// Run all systems in order for one tick.
    fn run_systems(&mut self, dt: f64) {
        self.time.advance(dt);
        self.director.update(dt);
        let now = self.time.elapsed_secs;
        let dt = dt as f32;
        let ground = self.tunables.ground();

        // 1. Resolve queued fire commands
        for aim in std::mem::take(&mut self.pending_shots) {
            self.try_shoot(aim);
        }

        // 2. Player movement
        systems::movement::run(&mut self.player, &ground, dt);

        // 3. Spawning and chests
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &self.director,
            &self.tunables,
            &mut self.spawn_timers,
            self.player.position,
            now,
            &mut self.next_entity_id,
            &mut self.events,
        );
        systems::chests::run(
            &mut self.world,
            &mut self.rng,
            self.player.position,
            now,
            dt,
            &mut self.next_entity_id,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        // 4. Enemy pass: pursuit, contact damage, then separation
        let player_died = systems::collision::run(
            &mut self.world,
            &mut self.player,
            now,
            dt,
            self.tunables.contact_cooldown_secs,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        if player_died {
            self.game_over();
            return;
        }
        systems::collision::separate(&mut self.world);

        // 5. Pickups and the level-up check
        systems::pickups::run_items(
            &mut self.world,
            &mut self.player,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        systems::pickups::run_gems(
            &mut self.world,
            &mut self.player,
            &mut self.score,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        if let Some(level_up) = progression::check_level_up(&mut self.player, &mut self.rng) {
            log::info!(
                "level {} reached: {:?} +{}",
                level_up.level,
                level_up.attribute,
                level_up.amount
            );
            self.events.push(GameEvent::LevelUp {
                level: level_up.level,
                attribute: level_up.attribute,
            });
        }

        // 6. Reload and projectiles
        if self.gun.update_reload(now) {
            log::trace!("reload complete at {now:.2}s");
            self.events.push(GameEvent::ReloadComplete);
        }
        let killed = systems::projectiles::run(
            &mut self.world,
            &mut self.rng,
            &self.player,
            dt,
            &mut self.events,
            &mut self.despawn_buffer,
        );

        // 7. Kill resolution (gem drops) and removal
        systems::cleanup::resolve_kills(
            &mut self.world,
            &killed,
            &mut self.next_entity_id,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    fn game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.pending_shots.clear();
        log::info!(
            "game over at {:.1}s, score {}, level {}",
            self.time.elapsed_secs,
            self.score,
            self.player.level
        );
        self.events.push(GameEvent::GameOver {
            score: self.score,
            elapsed_secs: self.time.elapsed_secs,
        });
    }
}
