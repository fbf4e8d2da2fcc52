//! Error taxonomy for sources, configuration and the refresh engine

use thiserror::Error;

/// Invalid construction parameters, rejected before first use
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("history capacity must be at least 1")]
    ZeroCapacity,

    #[error("refresh interval must be a positive number of seconds, got {secs}")]
    NonPositiveInterval { secs: f64 },

    #[error("refresh interval of {secs} seconds is too large")]
    IntervalTooLarge { secs: f64 },

    #[error("invalid {field} range [{min}, {max}]")]
    InvalidRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
}

/// A reading source failed to produce a reading
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("source '{source_id}' failed: {message}")]
pub struct SourceError {
    pub source_id: String,
    pub message: String,
}

impl SourceError {
    pub fn new(source_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            message: message.into(),
        }
    }
}

/// Errors surfaced to consumers of the engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// The refresh for `tick` failed; the previous snapshot is still published
    #[error("refresh for tick {tick} failed")]
    SourceFailure {
        tick: u64,
        #[source]
        error: SourceError,
    },

    /// No tick has completed yet, so there is no latest reading
    #[error("no data yet")]
    NoData,
}
