//! Field metadata for describing the columns of a reading

use serde::{Deserialize, Serialize};

/// Type of data a field contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    /// Numerical data (e.g., -27.3, 81.0)
    Numerical,
    /// Percentage (0.0 to 100.0)
    Percentage,
    /// Date-time rendered as `YYYY-MM-DD HH:MM:SS`
    Timestamp,
}

/// Purpose/role of a field in the data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldPurpose {
    /// Primary measured value
    Value,
    /// Additional/secondary measured value
    SecondaryValue,
    /// When the value was taken
    Time,
}

/// Metadata describing a single data field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMetadata {
    /// Unique identifier for this field (also the serialized key)
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Description of what this field represents
    pub description: String,
    /// Unit suffix used when displaying values ("°C", "%", "")
    pub unit: String,
    /// Type of data this field contains
    pub field_type: FieldType,
    /// Purpose/role of this field
    pub purpose: FieldPurpose,
}

impl FieldMetadata {
    /// Create a new field metadata
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        unit: impl Into<String>,
        field_type: FieldType,
        purpose: FieldPurpose,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            unit: unit.into(),
            field_type,
            purpose,
        }
    }
}
