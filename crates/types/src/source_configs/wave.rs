//! Waveform source configuration types.

use super::simulated::{DEFAULT_HUMIDITY_RANGE, DEFAULT_TEMPERATURE_RANGE};
use super::ValueRange;
use serde::{Deserialize, Serialize};

/// Waveform shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WaveMode {
    /// Sine wave oscillation
    #[default]
    SineWave,
    /// Sawtooth wave (linear ramp)
    Sawtooth,
    /// Triangle wave
    Triangle,
    /// Square wave
    Square,
}

fn default_period() -> f64 {
    120.0
}

fn default_temperature_range() -> ValueRange {
    DEFAULT_TEMPERATURE_RANGE
}

fn default_humidity_range() -> ValueRange {
    DEFAULT_HUMIDITY_RANGE
}

/// Waveform source configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveSourceConfig {
    /// Current mode
    #[serde(default)]
    pub mode: WaveMode,
    /// Wave period in seconds
    #[serde(default = "default_period")]
    pub period: f64,
    #[serde(default = "default_temperature_range")]
    pub temperature: ValueRange,
    #[serde(default = "default_humidity_range")]
    pub humidity: ValueRange,
}

impl Default for WaveSourceConfig {
    fn default() -> Self {
        Self {
            mode: WaveMode::default(),
            period: default_period(),
            temperature: default_temperature_range(),
            humidity: default_humidity_range(),
        }
    }
}
