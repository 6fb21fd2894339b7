//! The Director: difficulty state as a pure function of elapsed run time.

use holdout_core::config::EnemyType;
use holdout_core::enums::DifficultyPhase;

use crate::curve::{lerp, lerp_f32, phase_for};

/// Multiplier span over which speed and damage scaling ramps in. Past
/// `1.0 + STAT_RAMP_SPAN` they stop growing.
const STAT_RAMP_SPAN: f32 = 3.0;

/// Speed factor reached at the top of the ramp.
const MAX_SPEED_FACTOR: f32 = 1.3;

/// Damage factor reached at the top of the ramp.
const MAX_DAMAGE_FACTOR: f32 = 1.5;

/// Enemy stats after Director scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledStats {
    pub health: f32,
    pub speed: f32,
    pub damage: f32,
    pub score_value: u32,
}

/// Difficulty state. Only `elapsed` is history; everything else is
/// recomputed from it on every update.
#[derive(Debug, Clone)]
pub struct Director {
    elapsed: f64,
    spawn_interval: f64,
    enemies_per_spawn: u32,
    enemy_stat_multiplier: f32,
    phase: DifficultyPhase,
}

impl Default for Director {
    fn default() -> Self {
        Self::at(0.0)
    }
}

impl Director {
    pub fn new() -> Self {
        Self::default()
    }

    /// Director state for an arbitrary elapsed time.
    pub fn at(elapsed: f64) -> Self {
        let mut director = Self {
            elapsed,
            spawn_interval: 0.0,
            enemies_per_spawn: 0,
            enemy_stat_multiplier: 1.0,
            phase: DifficultyPhase::default(),
        };
        director.adjust_difficulty();
        director
    }

    /// Advance by one frame.
    pub fn update(&mut self, dt: f64) {
        self.elapsed += dt;
        self.adjust_difficulty();
    }

    fn adjust_difficulty(&mut self) {
        let curve = phase_for(self.elapsed);
        let progress = curve.progress(self.elapsed);

        self.phase = curve.phase;
        self.spawn_interval = lerp(curve.spawn_interval.0, curve.spawn_interval.1, progress);
        self.enemies_per_spawn =
            curve.enemies_base + (progress * curve.enemies_steps as f64).floor() as u32;
        self.enemy_stat_multiplier = lerp_f32(
            curve.stat_multiplier.0,
            curve.stat_multiplier.1,
            progress as f32,
        );
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Seconds between spawn waves.
    pub fn spawn_interval(&self) -> f64 {
        self.spawn_interval
    }

    pub fn enemies_per_spawn(&self) -> u32 {
        self.enemies_per_spawn
    }

    pub fn enemy_stat_multiplier(&self) -> f32 {
        self.enemy_stat_multiplier
    }

    pub fn phase(&self) -> DifficultyPhase {
        self.phase
    }

    /// Scale an archetype's base stats.
    ///
    /// Health and score scale with the raw multiplier. Speed and damage
    /// use a gentler ramp keyed on how far the multiplier is past 1.0, so
    /// late enemies get tankier faster than they get quicker or deadlier.
    pub fn enemy_stats(&self, base: &EnemyType) -> ScaledStats {
        let m = self.enemy_stat_multiplier;
        let ramp = ((m - 1.0) / STAT_RAMP_SPAN).clamp(0.0, 1.0);

        ScaledStats {
            health: (base.health * m).round(),
            speed: base.speed * lerp_f32(1.0, MAX_SPEED_FACTOR, ramp),
            damage: (base.damage * lerp_f32(1.0, MAX_DAMAGE_FACTOR, ramp)).round(),
            score_value: (base.score_value as f32 * m).round() as u32,
        }
    }

    /// Whether a spawn wave is due.
    pub fn should_spawn(&self, now: f64, last_spawn: f64) -> bool {
        now - last_spawn >= self.spawn_interval
    }
}
