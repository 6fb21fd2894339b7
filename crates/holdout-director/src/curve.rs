//! Phase table for the difficulty curve.

use holdout_core::enums::DifficultyPhase;

/// One segment of the curve. Values are interpolated linearly from the
/// `.0` end to the `.1` end across `[start, end)`.
#[derive(Debug, Clone, Copy)]
pub struct PhaseCurve {
    pub phase: DifficultyPhase,
    pub start: f64,
    pub end: f64,
    pub spawn_interval: (f64, f64),
    /// Group size at phase start.
    pub enemies_base: u32,
    /// Extra enemies reached (stepwise, floored) by phase end.
    pub enemies_steps: u32,
    pub stat_multiplier: (f32, f32),
}

pub const PHASE_1_END: f64 = 180.0;
pub const PHASE_2_END: f64 = 480.0;
pub const PHASE_3_END: f64 = 780.0;
pub const PHASE_4_END: f64 = 1080.0;

/// Endgame keeps scaling for this long past `PHASE_4_END`, then holds.
pub const ENDGAME_RAMP_SECS: f64 = 300.0;

pub const MIN_SPAWN_INTERVAL: f64 = 0.35;
pub const MAX_ENEMIES_PER_SPAWN: u32 = 8;

pub static PHASES: [PhaseCurve; 5] = [
    PhaseCurve {
        phase: DifficultyPhase::Learning,
        start: 0.0,
        end: PHASE_1_END,
        spawn_interval: (2.5, 2.0),
        enemies_base: 1,
        enemies_steps: 0,
        stat_multiplier: (1.0, 1.15),
    },
    PhaseCurve {
        phase: DifficultyPhase::Early,
        start: PHASE_1_END,
        end: PHASE_2_END,
        spawn_interval: (2.0, 1.2),
        enemies_base: 1,
        enemies_steps: 2,
        stat_multiplier: (1.15, 1.5),
    },
    PhaseCurve {
        phase: DifficultyPhase::Mid,
        start: PHASE_2_END,
        end: PHASE_3_END,
        spawn_interval: (1.2, 0.8),
        enemies_base: 3,
        enemies_steps: 2,
        stat_multiplier: (1.5, 2.0),
    },
    PhaseCurve {
        phase: DifficultyPhase::Late,
        start: PHASE_3_END,
        end: PHASE_4_END,
        spawn_interval: (0.8, 0.5),
        enemies_base: 5,
        enemies_steps: 2,
        stat_multiplier: (2.0, 2.8),
    },
    PhaseCurve {
        phase: DifficultyPhase::Endgame,
        start: PHASE_4_END,
        end: PHASE_4_END + ENDGAME_RAMP_SECS,
        spawn_interval: (0.5, MIN_SPAWN_INTERVAL),
        enemies_base: 7,
        enemies_steps: MAX_ENEMIES_PER_SPAWN - 7,
        stat_multiplier: (2.8, 4.0),
    },
];

/// Find the segment containing `elapsed`. Times past the last boundary
/// belong to the endgame.
pub fn phase_for(elapsed: f64) -> &'static PhaseCurve {
    PHASES
        .iter()
        .find(|p| elapsed < p.end)
        .unwrap_or(&PHASES[PHASES.len() - 1])
}

impl PhaseCurve {
    /// Progress through this segment in `[0, 1]`.
    pub fn progress(&self, elapsed: f64) -> f64 {
        ((elapsed - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }
}

pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start * (1.0 - t) + end * t
}

pub fn lerp_f32(start: f32, end: f32, t: f32) -> f32 {
    start * (1.0 - t) + end * t
}
