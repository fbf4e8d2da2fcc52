//! Replay source: hands out a recorded list of readings in order
//!
//! Once the list is exhausted every call fails, unless the source is looped.

use anyhow::{bail, Result};
use log::debug;
use polar_dash_core::{Reading, ReadingSource, SourceConfig, SourceError, SourceMetadata};
use polar_dash_types::ReplaySourceConfig;
use std::time::Duration;

/// Replay source
pub struct ReplaySource {
    metadata: SourceMetadata,
    config: ReplaySourceConfig,
    position: usize,
}

impl ReplaySource {
    pub fn new() -> Self {
        Self::with_config(ReplaySourceConfig::default())
    }

    /// Replay `readings` once, oldest first
    pub fn from_readings(readings: Vec<Reading>) -> Self {
        Self::with_config(ReplaySourceConfig {
            readings,
            looped: false,
        })
    }

    pub fn with_config(config: ReplaySourceConfig) -> Self {
        Self {
            metadata: SourceMetadata::new(
                "replay",
                "Replay",
                "Recorded readings replayed in order",
                Duration::from_secs(10),
            ),
            config,
            position: 0,
        }
    }

    /// Readings left before the source is exhausted
    pub fn remaining(&self) -> usize {
        self.config.readings.len().saturating_sub(self.position)
    }
}

impl Default for ReplaySource {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadingSource for ReplaySource {
    fn metadata(&self) -> &SourceMetadata {
        &self.metadata
    }

    fn produce(&mut self) -> Result<Reading, SourceError> {
        let len = self.config.readings.len();
        if self.position >= len {
            if !self.config.looped || len == 0 {
                return Err(SourceError::new(
                    &self.metadata.id,
                    format!("all {} recorded readings replayed", len),
                ));
            }
            debug!("Replay source restarting from the first of {} readings", len);
            self.position = 0;
        }
        let reading = self.config.readings[self.position];
        self.position += 1;
        Ok(reading)
    }

    fn is_available(&self) -> bool {
        !self.config.readings.is_empty()
    }

    fn configure_typed(&mut self, config: &SourceConfig) -> Result<()> {
        match config {
            SourceConfig::Replay(cfg) => {
                self.config = cfg.clone();
                self.position = 0;
                Ok(())
            }
            other => bail!("Replay source cannot use {} config", other.source_type()),
        }
    }

    fn get_typed_config(&self) -> Option<SourceConfig> {
        Some(SourceConfig::Replay(self.config.clone()))
    }
}
