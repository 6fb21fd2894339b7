//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Position on the ground plane. `x` is east, `y` is the ground's depth axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// Stable identifier handed to the render/UI layer for every spawned entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks advanced (paused ticks are not counted).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

/// Axis-aligned square ground area centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundBounds {
    pub half_extent: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f32 {
        self.0.distance(other.0)
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl SimTime {
    /// Advance the clock by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

impl GroundBounds {
    pub fn new(half_extent: f32) -> Self {
        Self { half_extent }
    }

    /// Strict containment: points on the edge are outside.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x.abs() < self.half_extent && point.y.abs() < self.half_extent
    }

    /// Clamp a point onto the ground (edges inclusive).
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        point.clamp(Vec2::splat(-self.half_extent), Vec2::splat(self.half_extent))
    }
}

impl Default for GroundBounds {
    fn default() -> Self {
        Self::new(crate::constants::GROUND_HALF_EXTENT)
    }
}
