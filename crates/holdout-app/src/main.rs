use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use holdout_app::autopilot;
use holdout_app::game_loop::{self, LoopOptions, TICK_DURATION};
use holdout_app::state::GameLoopCommand;
use holdout_core::config::Tunables;
use holdout_core::enums::GamePhase;
use holdout_sim::engine::{SimConfig, SimulationEngine};

/// Headless HOLDOUT run driven by the autopilot
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RNG seed; the same seed replays the same run
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Stop after this many simulated seconds
    #[arg(long)]
    max_secs: Option<f64>,

    /// Wall-clock speed multiplier (0 runs unthrottled)
    #[arg(long, default_value_t = 1.0)]
    time_scale: f64,

    /// JSON tunables file; missing fields use the defaults
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_tunables(path: Option<&PathBuf>) -> anyhow::Result<Tunables> {
    let Some(path) = path else {
        return Ok(Tunables::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading tunables from {}", path.display()))?;
    Tunables::from_json_str(&json).with_context(|| format!("invalid tunables in {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let tunables = load_tunables(args.config.as_ref())?;
    log::debug!("tunables: {}", serde_json::to_string(&tunables)?);
    let engine = SimulationEngine::new(SimConfig {
        seed: args.seed,
        tunables,
    })?;

    let options = LoopOptions {
        time_scale: args.time_scale,
        max_secs: args.max_secs,
    };
    let handle = game_loop::spawn_game_loop(engine, options).context("starting game loop")?;
    log::info!("run started with seed {}", args.seed);

    let poll = options.tick_duration().unwrap_or(Duration::ZERO);
    let mut last_planned_tick = None;
    while !handle.is_finished() {
        if let Some(snapshot) = handle.snapshot() {
            if snapshot.phase == GamePhase::GameOver {
                break;
            }
            if last_planned_tick != Some(snapshot.time.tick)
                && !handle.send(autopilot::plan(&snapshot))
            {
                break;
            }
            last_planned_tick = Some(snapshot.time.tick);
        }
        std::thread::sleep(poll.max(TICK_DURATION / 16));
    }

    let _ = handle.command_tx.send(GameLoopCommand::Shutdown);
    let summary = handle
        .thread
        .join()
        .map_err(|_| anyhow::anyhow!("game loop thread panicked"))?;

    log::info!(
        "run ended ({:?}) after {:.1}s: score {}, level {}",
        summary.phase,
        summary.elapsed_secs,
        summary.score,
        summary.level
    );
    Ok(())
}
