//! Error types for Mountain Hop
//!
//! The simulation itself never fails. Errors only surface at the boundary:
//! bad configuration going in, and high score storage going out.

use thiserror::Error;

/// Rejected configuration (viewport geometry or tuning values)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid viewport: {width}x{height} (dimensions must be positive and finite)")]
    InvalidViewport { width: f32, height: f32 },

    #[error("Invalid tuning value `{field}`: {reason}")]
    InvalidTuning { field: &'static str, reason: String },

    #[error("Tuning parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// High score storage failure
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed high score record: {0}")]
    Malformed(#[from] serde_json::Error),
}
