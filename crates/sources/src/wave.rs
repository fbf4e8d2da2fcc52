//! Waveform reading source for demonstrations and debugging
//!
//! Produces deterministic readings that sweep through the configured ranges,
//! which makes trend lines and histograms easy to eyeball.

use anyhow::{bail, Result};
use polar_dash_core::{Reading, ReadingSource, SourceConfig, SourceError, SourceMetadata};
use polar_dash_types::{round_to_tenth, WaveMode, WaveSourceConfig};
use std::time::{Duration, Instant};

use crate::check_range;

/// Waveform source
pub struct WaveSource {
    metadata: SourceMetadata,
    config: WaveSourceConfig,
    start_time: Instant,
}

impl WaveSource {
    pub fn new() -> Self {
        Self {
            metadata: SourceMetadata::new(
                "wave",
                "Waveform",
                "Temperature and humidity following a periodic waveform",
                Duration::from_secs(10),
            ),
            config: WaveSourceConfig::default(),
            start_time: Instant::now(),
        }
    }

    /// Set configuration and restart the waveform
    pub fn set_config(&mut self, config: WaveSourceConfig) -> Result<()> {
        if !(config.period.is_finite() && config.period > 0.0) {
            bail!("Wave period must be positive, got {}", config.period);
        }
        check_range("temperature", &config.temperature)?;
        check_range("humidity", &config.humidity)?;
        self.config = config;
        self.start_time = Instant::now();
        Ok(())
    }

    /// Normalized waveform value (0.0 to 1.0) `elapsed` seconds in
    pub fn normalized_at(&self, elapsed: f64) -> f64 {
        let phase = (elapsed / self.config.period).fract();
        match self.config.mode {
            WaveMode::SineWave => {
                let angle = phase * std::f64::consts::TAU;
                (angle.sin() + 1.0) / 2.0
            }
            WaveMode::Sawtooth => phase,
            WaveMode::Triangle => {
                let phase = phase * 2.0; // 0.0 to 2.0
                if phase <= 1.0 {
                    phase
                } else {
                    2.0 - phase
                }
            }
            WaveMode::Square => {
                if phase < 0.5 {
                    0.0
                } else {
                    1.0
                }
            }
        }
    }

    /// Temperature and humidity `elapsed` seconds in. Humidity runs half a
    /// period behind temperature.
    pub fn values_at(&self, elapsed: f64) -> (f64, f64) {
        let half_period = self.config.period / 2.0;
        let temperature = self.config.temperature.lerp(self.normalized_at(elapsed));
        let humidity = self
            .config
            .humidity
            .lerp(self.normalized_at(elapsed + half_period));
        (round_to_tenth(temperature), round_to_tenth(humidity))
    }
}

impl Default for WaveSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadingSource for WaveSource {
    fn metadata(&self) -> &SourceMetadata {
        &self.metadata
    }

    fn produce(&mut self) -> Result<Reading, SourceError> {
        let (temperature, humidity) = self.values_at(self.start_time.elapsed().as_secs_f64());
        Ok(Reading::now(temperature, humidity))
    }

    fn configure_typed(&mut self, config: &SourceConfig) -> Result<()> {
        match config {
            SourceConfig::Wave(cfg) => self.set_config(cfg.clone()),
            other => bail!("Wave source cannot use {} config", other.source_type()),
        }
    }

    fn get_typed_config(&self) -> Option<SourceConfig> {
        Some(SourceConfig::Wave(self.config.clone()))
    }
}
