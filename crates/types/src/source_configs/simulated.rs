//! Simulated arctic climate source configuration types.

use super::ValueRange;
use serde::{Deserialize, Serialize};

/// Default temperature range in °C
pub const DEFAULT_TEMPERATURE_RANGE: ValueRange = ValueRange::new(-30.0, -25.0);
/// Default humidity range in %
pub const DEFAULT_HUMIDITY_RANGE: ValueRange = ValueRange::new(70.0, 95.0);

fn default_temperature_range() -> ValueRange {
    DEFAULT_TEMPERATURE_RANGE
}

fn default_humidity_range() -> ValueRange {
    DEFAULT_HUMIDITY_RANGE
}

/// Configuration for the simulated source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatedSourceConfig {
    /// Range temperatures are drawn from (uniformly)
    #[serde(default = "default_temperature_range")]
    pub temperature: ValueRange,
    /// Range humidity values are drawn from (uniformly)
    #[serde(default = "default_humidity_range")]
    pub humidity: ValueRange,
    /// Fixed RNG seed for reproducible runs; entropy-seeded when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SimulatedSourceConfig {
    fn default() -> Self {
        Self {
            temperature: default_temperature_range(),
            humidity: default_humidity_range(),
            seed: None,
        }
    }
}
