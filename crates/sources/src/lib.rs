//! polar-dash-sources: Reading source implementations for polar-dash.

mod replay;
mod simulated;
mod wave;

pub use polar_dash_types::source_configs::{
    ReplaySourceConfig, SimulatedSourceConfig, ValueRange, WaveMode, WaveSourceConfig,
};
pub use replay::ReplaySource;
pub use simulated::SimulatedSource;
pub use wave::WaveSource;

use anyhow::Result;
use polar_dash_core::{BoxedReadingSource, ConfigError, Registry, SourceConfig};

/// Register all built-in sources with a registry
pub fn register_all(registry: &mut Registry) {
    registry.register_source_with_info("simulated", "Simulated Arctic Climate", || {
        Box::new(SimulatedSource::new())
    });

    registry.register_source_with_info("wave", "Waveform", || Box::new(WaveSource::new()));

    registry.register_source_with_info("replay", "Replay", || Box::new(ReplaySource::new()));
}

/// Build a registry holding every built-in source
pub fn builtin_registry() -> Registry {
    let mut registry = Registry::new();
    register_all(&mut registry);
    registry
}

/// Create and configure a built-in source from its typed configuration
pub fn create_source(config: &SourceConfig) -> Result<BoxedReadingSource> {
    builtin_registry().create_configured(config)
}

/// Reject a range whose bounds are not finite or are reversed
pub(crate) fn check_range(field: &'static str, range: &ValueRange) -> Result<(), ConfigError> {
    if range.is_valid() {
        Ok(())
    } else {
        Err(ConfigError::InvalidRange {
            field,
            min: range.min,
            max: range.max,
        })
    }
}
