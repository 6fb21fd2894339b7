//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Movement ---
    /// Held-key movement intent. Expected normalised; longer vectors are
    /// clamped to unit length. Persists until replaced.
    SetMoveIntent { x: f32, y: f32 },

    // --- Weapon ---
    /// Fire one shot toward the given direction (not a target point).
    Fire { aim_x: f32, aim_y: f32 },
    /// Resize the clip, preserving the current fill ratio.
    SetClipSize { size: u32 },

    // --- Simulation control ---
    /// Freeze the clock.
    Pause,
    /// Resume the clock.
    Resume,
}
