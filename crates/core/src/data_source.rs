//! Reading source trait and related types

use crate::error::SourceError;
use anyhow::Result;
use polar_dash_types::{Reading, SourceConfig};
use std::time::Duration;

/// Metadata about a reading source
#[derive(Debug, Clone)]
pub struct SourceMetadata {
    /// Unique identifier for this source type
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Description of what this source provides
    pub description: String,
    /// Recommended refresh interval
    pub default_interval: Duration,
}

impl SourceMetadata {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        default_interval: Duration,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            default_interval,
        }
    }
}

/// Trait for all reading sources
///
/// A source produces one freshly stamped reading per call. Sources backed by
/// real hardware or a network are expected to retry internally and hand the
/// engine either a reading or a [`SourceError`].
pub trait ReadingSource: Send {
    /// Get metadata about this source
    fn metadata(&self) -> &SourceMetadata;

    /// Produce a new reading
    fn produce(&mut self) -> Result<Reading, SourceError>;

    /// Check if this source can currently produce readings
    fn is_available(&self) -> bool {
        true
    }

    /// Configure the source with typed configuration
    fn configure_typed(&mut self, _config: &SourceConfig) -> Result<()> {
        Ok(())
    }

    /// Get the current typed configuration (if available)
    fn get_typed_config(&self) -> Option<SourceConfig> {
        None
    }
}

/// Type-erased reading source for dynamic dispatch
pub type BoxedReadingSource = Box<dyn ReadingSource>;

/// Adapts a closure into a [`ReadingSource`]
pub struct FnSource<F> {
    metadata: SourceMetadata,
    produce: F,
}

impl<F> FnSource<F>
where
    F: FnMut() -> Result<Reading, SourceError> + Send,
{
    pub fn new(id: impl Into<String>, produce: F) -> Self {
        let id = id.into();
        Self {
            metadata: SourceMetadata::new(
                id.clone(),
                id,
                "Closure-backed reading source",
                crate::constants::DEFAULT_REFRESH_INTERVAL,
            ),
            produce,
        }
    }
}

impl<F> ReadingSource for FnSource<F>
where
    F: FnMut() -> Result<Reading, SourceError> + Send,
{
    fn metadata(&self) -> &SourceMetadata {
        &self.metadata
    }

    fn produce(&mut self) -> Result<Reading, SourceError> {
        (self.produce)()
    }
}
