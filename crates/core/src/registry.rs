//! Registry of reading source factories

use crate::data_source::BoxedReadingSource;
use anyhow::{anyhow, Context, Result};
use polar_dash_types::SourceConfig;
use std::collections::HashMap;

/// Function that creates a reading source
pub type SourceFactory = fn() -> BoxedReadingSource;

/// Descriptive information about a registered source
#[derive(Debug, Clone)]
pub struct SourceInfo {
    pub id: String,
    pub name: String,
}

/// Registry for reading sources.
///
/// Built explicitly at startup and passed to whoever creates engines.
pub struct Registry {
    sources: HashMap<String, (SourceInfo, SourceFactory)>,
}

impl Registry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            sources: HashMap::new(),
        }
    }

    /// Register a reading source with a display name
    pub fn register_source_with_info(&mut self, id: &str, name: &str, factory: SourceFactory) {
        let info = SourceInfo {
            id: id.to_string(),
            name: name.to_string(),
        };
        self.sources.insert(id.to_string(), (info, factory));
    }

    /// Create a reading source by ID with its default configuration
    pub fn create_source(&self, id: &str) -> Result<BoxedReadingSource> {
        let (_, factory) = self
            .sources
            .get(id)
            .ok_or_else(|| anyhow!("Unknown source: {}", id))?;
        Ok(factory())
    }

    /// Create a reading source and apply a typed configuration to it
    pub fn create_configured(&self, config: &SourceConfig) -> Result<BoxedReadingSource> {
        let mut source = self.create_source(config.source_type())?;
        source
            .configure_typed(config)
            .with_context(|| format!("Failed to configure source {}", config.source_type()))?;
        Ok(source)
    }

    /// Information about a registered source
    pub fn source_info(&self, id: &str) -> Option<&SourceInfo> {
        self.sources.get(id).map(|(info, _)| info)
    }

    /// List all registered source IDs, sorted
    pub fn list_sources(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.sources.keys().cloned().collect();
        ids.sort();
        ids
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
