//! Replay source configuration types.

use crate::reading::Reading;
use serde::{Deserialize, Serialize};

/// Configuration for a source that replays recorded readings in order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ReplaySourceConfig {
    /// Readings to hand out, oldest first
    #[serde(default)]
    pub readings: Vec<Reading>,
    /// Start over from the first reading instead of failing once exhausted
    #[serde(default)]
    pub looped: bool,
}
