//! Error types for the Trickster core.

use thiserror::Error;

/// Result type for Trickster operations.
pub type TricksterResult<T> = Result<T, TricksterError>;

/// Errors raised while building or restoring Trickster state.
///
/// Acts themselves never fail: an ineligible effect is skipped and redrawn.
#[derive(Debug, Error)]
pub enum TricksterError {
    /// A restored or requested standing lies outside `0..=max`.
    #[error("standing {standing} is outside 0..={max}")]
    StandingOutOfRange {
        /// The rejected standing.
        standing: i32,
        /// The upper bound.
        max: i32,
    },

    /// A configuration value is unusable.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// JSON input could not be parsed.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}
