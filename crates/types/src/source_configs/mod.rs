//! Source configuration types for all reading sources.

pub mod range;
pub mod replay;
pub mod simulated;
pub mod wave;

// Re-export all source config types for convenience
pub use range::ValueRange;
pub use replay::ReplaySourceConfig;
pub use simulated::SimulatedSourceConfig;
pub use wave::{WaveMode, WaveSourceConfig};

use serde::{Deserialize, Serialize};

/// Type-safe enum for all source configurations.
/// Uses serde tag for JSON serialization: {"source_type": "simulated", ...}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source_type")]
pub enum SourceConfig {
    #[serde(rename = "simulated")]
    Simulated(SimulatedSourceConfig),

    #[serde(rename = "wave")]
    Wave(WaveSourceConfig),

    #[serde(rename = "replay")]
    Replay(ReplaySourceConfig),
}

impl SourceConfig {
    /// Get the source type ID string
    pub fn source_type(&self) -> &'static str {
        match self {
            SourceConfig::Simulated(_) => "simulated",
            SourceConfig::Wave(_) => "wave",
            SourceConfig::Replay(_) => "replay",
        }
    }

    /// Default configuration for a source type ID, if the ID is known
    pub fn default_for_type(source_type: &str) -> Option<Self> {
        match source_type {
            "simulated" => Some(SourceConfig::Simulated(SimulatedSourceConfig::default())),
            "wave" => Some(SourceConfig::Wave(WaveSourceConfig::default())),
            "replay" => Some(SourceConfig::Replay(ReplaySourceConfig::default())),
            _ => None,
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::Simulated(SimulatedSourceConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_config_serialization() {
        let config = SourceConfig::Wave(WaveSourceConfig::default());
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"source_type\":\"wave\""));

        let deserialized: SourceConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.source_type(), "wave");
    }

    #[test]
    fn test_simulated_config_fills_defaults() {
        let config: SourceConfig = serde_json::from_str(r#"{"source_type":"simulated"}"#).unwrap();
        assert_eq!(config, SourceConfig::default());
    }

    #[test]
    fn test_default_for_unknown_type() {
        assert!(SourceConfig::default_for_type("replay").is_some());
        assert!(SourceConfig::default_for_type("cpu").is_none());
    }
}
