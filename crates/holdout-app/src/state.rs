//! State shared between the game loop thread and its controller.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use holdout_core::commands::PlayerCommand;
use holdout_core::enums::GamePhase;
use holdout_core::state::GameStateSnapshot;

/// Commands sent from the controller to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot, written by the game loop after each tick.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

/// How a run ended.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    pub elapsed_secs: f64,
    pub score: u64,
    pub level: u32,
    pub phase: GamePhase,
}

impl RunSummary {
    pub fn from_snapshot(snapshot: &GameStateSnapshot) -> Self {
        Self {
            ticks: snapshot.time.tick,
            elapsed_secs: snapshot.time.elapsed_secs,
            score: snapshot.hud.score,
            level: snapshot.hud.level,
            phase: snapshot.phase,
        }
    }
}

/// Controller-side handle to a running game loop.
pub struct GameLoopHandle {
    pub command_tx: mpsc::Sender<GameLoopCommand>,
    pub latest_snapshot: SharedSnapshot,
    pub thread: std::thread::JoinHandle<RunSummary>,
}

impl GameLoopHandle {
    /// Clone of the most recent snapshot, if any tick has run.
    pub fn snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|lock| lock.clone())
    }

    /// Forward player commands. Returns false once the loop has exited.
    pub fn send(&self, commands: impl IntoIterator<Item = PlayerCommand>) -> bool {
        commands
            .into_iter()
            .all(|cmd| self.command_tx.send(GameLoopCommand::PlayerCommand(cmd)).is_ok())
    }

    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_from_snapshot() {
        let mut snapshot = GameStateSnapshot::default();
        snapshot.time.tick = 120;
        snapshot.time.elapsed_secs = 2.0;
        snapshot.hud.score = 45;
        snapshot.hud.level = 3;
        snapshot.phase = GamePhase::GameOver;

        let summary = RunSummary::from_snapshot(&snapshot);
        assert_eq!(summary.ticks, 120);
        assert_eq!(summary.score, 45);
        assert_eq!(summary.level, 3);
        assert_eq!(summary.phase, GamePhase::GameOver);
    }
}
