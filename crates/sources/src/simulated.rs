//! Simulated arctic climate source
//!
//! Draws temperature and humidity uniformly from configured ranges, rounded
//! to one decimal, and stamps each reading with the local wall clock.

use anyhow::{bail, Result};
use polar_dash_core::{Reading, ReadingSource, SourceConfig, SourceError, SourceMetadata};
use polar_dash_types::{round_to_tenth, SimulatedSourceConfig, ValueRange};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

use crate::check_range;

/// Simulated reading source (the default)
pub struct SimulatedSource {
    metadata: SourceMetadata,
    config: SimulatedSourceConfig,
    rng: StdRng,
}

impl SimulatedSource {
    pub fn new() -> Self {
        Self::from_parts(SimulatedSourceConfig::default(), StdRng::from_entropy())
    }

    /// Source with a fixed seed, producing a reproducible value sequence
    pub fn with_seed(seed: u64) -> Self {
        let config = SimulatedSourceConfig {
            seed: Some(seed),
            ..Default::default()
        };
        Self::from_parts(config, StdRng::seed_from_u64(seed))
    }

    fn from_parts(config: SimulatedSourceConfig, rng: StdRng) -> Self {
        Self {
            metadata: SourceMetadata::new(
                "simulated",
                "Simulated Arctic Climate",
                "Random temperature and humidity within fixed ranges",
                Duration::from_secs(10),
            ),
            config,
            rng,
        }
    }

    /// Set configuration, reseeding when it carries a seed
    pub fn set_config(&mut self, config: SimulatedSourceConfig) -> Result<()> {
        check_range("temperature", &config.temperature)?;
        check_range("humidity", &config.humidity)?;
        if let Some(seed) = config.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &SimulatedSourceConfig {
        &self.config
    }

    fn sample(&mut self, range: ValueRange) -> f64 {
        round_to_tenth(self.rng.gen_range(range.min..=range.max))
    }
}

impl Default for SimulatedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadingSource for SimulatedSource {
    fn metadata(&self) -> &SourceMetadata {
        &self.metadata
    }

    fn produce(&mut self) -> Result<Reading, SourceError> {
        let temperature = self.sample(self.config.temperature);
        let humidity = self.sample(self.config.humidity);
        Ok(Reading::now(temperature, humidity))
    }

    fn configure_typed(&mut self, config: &SourceConfig) -> Result<()> {
        match config {
            SourceConfig::Simulated(cfg) => self.set_config(cfg.clone()),
            other => bail!("Simulated source cannot use {} config", other.source_type()),
        }
    }

    fn get_typed_config(&self) -> Option<SourceConfig> {
        Some(SourceConfig::Simulated(self.config.clone()))
    }
}
