//! Error types for configuration and construction-time validation.

use thiserror::Error;

/// Raised when tunables or an enemy type table fail validation.
///
/// Validation runs before any entity is created, so a value that passes
/// can never put a malformed entity into a registry.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("enemy type table is empty")]
    EmptyEnemyTable,

    #[error("enemy type `{name}`: {reason}")]
    InvalidEnemyType { name: String, reason: &'static str },

    #[error("clip size must be at least 1, got {0}")]
    InvalidClipSize(u32),

    #[error("`{field}` must be {expected}, got {value}")]
    OutOfRange {
        field: &'static str,
        expected: &'static str,
        value: f64,
    },

    #[error("failed to parse tunables: {0}")]
    Parse(#[from] serde_json::Error),
}
