//! Game loop thread: runs the simulation engine at the nominal tick rate
//! and publishes snapshots.
//!
//! The engine is built by the caller, so configuration errors surface
//! before the thread starts, and then moved into the thread, which becomes
//! its sole owner. Commands arrive via `mpsc` channel. Snapshots are stored
//! in shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use holdout_core::constants::{DT, TICK_RATE};
use holdout_core::enums::GamePhase;
use holdout_core::state::GameStateSnapshot;
use holdout_sim::engine::SimulationEngine;

use crate::state::{GameLoopCommand, GameLoopHandle, RunSummary, SharedSnapshot};

/// Nominal duration of one tick at 1x speed.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Pacing and stop conditions for a run.
#[derive(Debug, Clone, Copy)]
pub struct LoopOptions {
    /// Wall-clock speed multiplier. At or below 0.001 the loop runs
    /// unthrottled.
    pub time_scale: f64,
    /// Stop once this much simulated time has passed.
    pub max_secs: Option<f64>,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            max_secs: None,
        }
    }
}

impl LoopOptions {
    /// Wall-clock time per tick, or `None` when unthrottled.
    pub fn tick_duration(&self) -> Option<Duration> {
        (self.time_scale > 0.001).then(|| TICK_DURATION.div_f64(self.time_scale))
    }
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop(
    engine: SimulationEngine,
    options: LoopOptions,
) -> std::io::Result<GameLoopHandle> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot: SharedSnapshot = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest_snapshot);

    let thread = std::thread::Builder::new()
        .name("holdout-game-loop".into())
        .spawn(move || run_game_loop(engine, cmd_rx, &shared, options))?;

    Ok(GameLoopHandle {
        command_tx: cmd_tx,
        latest_snapshot,
        thread,
    })
}

/// The game loop. Runs until Shutdown, channel disconnect, game over or
/// the time limit.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    options: LoopOptions,
) -> RunSummary {
    let mut next_tick_time = Instant::now();
    let mut last = GameStateSnapshot::default();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return RunSummary::from_snapshot(&last),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return RunSummary::from_snapshot(&last),
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick(DT);
        let finished = snapshot.phase == GamePhase::GameOver
            || options
                .max_secs
                .is_some_and(|max| snapshot.time.elapsed_secs >= max);

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }
        last = snapshot;

        if finished {
            log::debug!("game loop finished after {} ticks", last.time.tick);
            return RunSummary::from_snapshot(&last);
        }

        // 4. Sleep until next tick, adjusting for time_scale
        let Some(tick_duration) = options.tick_duration() else {
            continue;
        };
        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * 2 {
            // Too far behind; reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdout_core::commands::PlayerCommand;
    use holdout_sim::engine::SimConfig;

    fn engine() -> SimulationEngine {
        SimulationEngine::new(SimConfig::default()).unwrap()
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Fire {
            aim_x: 1.0,
            aim_y: 0.0,
        }))
        .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<_> = rx.try_iter().collect();
        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::Pause)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::PlayerCommand(PlayerCommand::Fire { .. })
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_time_scale_pacing() {
        let fast = LoopOptions {
            time_scale: 2.0,
            max_secs: None,
        };
        assert_eq!(fast.tick_duration(), Some(TICK_DURATION.div_f64(2.0)));

        let unthrottled = LoopOptions {
            time_scale: 0.0,
            max_secs: None,
        };
        assert_eq!(unthrottled.tick_duration(), None);
    }

    #[test]
    fn test_loop_stops_at_time_limit() {
        let handle = spawn_game_loop(
            engine(),
            LoopOptions {
                time_scale: 0.0,
                max_secs: Some(1.0),
            },
        )
        .unwrap();

        let summary = handle.thread.join().unwrap();
        assert!(summary.elapsed_secs >= 1.0);
        assert!(summary.ticks >= 60 && summary.ticks <= 61);
        assert_eq!(summary.phase, GamePhase::Active);
    }

    #[test]
    fn test_shutdown_stops_loop() {
        let handle = spawn_game_loop(engine(), LoopOptions::default()).unwrap();
        handle.command_tx.send(GameLoopCommand::Shutdown).unwrap();
        let summary = handle.thread.join().unwrap();
        assert!(summary.ticks < 60);
    }

    #[test]
    fn test_snapshot_published() {
        let handle = spawn_game_loop(
            engine(),
            LoopOptions {
                time_scale: 0.0,
                max_secs: Some(0.5),
            },
        )
        .unwrap();
        let GameLoopHandle {
            latest_snapshot,
            thread,
            ..
        } = handle;
        let summary = thread.join().unwrap();

        let snapshot = latest_snapshot.lock().unwrap().clone().unwrap();
        assert_eq!(snapshot.time.tick, summary.ticks);
    }
}
