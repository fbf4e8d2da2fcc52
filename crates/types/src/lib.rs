//! polar-dash-types: Shared data types for the polar-dash climate dashboard.
//!
//! This crate contains pure data types (readings, tabular views, field
//! metadata, source configs) shared across all polar-dash crates. It does no
//! I/O and needs no async runtime, making it suitable as a foundation layer.

pub mod field;
pub mod reading;
pub mod source_configs;
pub mod table;

// Re-export commonly used types at the crate root for convenience
pub use field::{FieldMetadata, FieldPurpose, FieldType};
pub use reading::{round_to_tenth, Reading, TIMESTAMP_FORMAT};
pub use source_configs::{
    ReplaySourceConfig, SimulatedSourceConfig, SourceConfig, ValueRange, WaveMode,
    WaveSourceConfig,
};
pub use source_configs::simulated::{DEFAULT_HUMIDITY_RANGE, DEFAULT_TEMPERATURE_RANGE};
pub use table::{
    ReadingRow, ReadingTable, HUMIDITY_COLUMN, TEMPERATURE_COLUMN, TIMESTAMP_COLUMN,
};
