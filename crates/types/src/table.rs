//! Tabular projection of a reading history (one row per reading)

use crate::field::{FieldMetadata, FieldPurpose, FieldType};
use crate::reading::Reading;
use serde::{Deserialize, Serialize};

/// Column id for temperature values
pub const TEMPERATURE_COLUMN: &str = "temperature";
/// Column id for humidity values
pub const HUMIDITY_COLUMN: &str = "humidity";
/// Column id for timestamps
pub const TIMESTAMP_COLUMN: &str = "timestamp";

/// One row of the table, already in display form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingRow {
    pub temperature: f64,
    pub humidity: f64,
    pub timestamp: String,
}

impl From<&Reading> for ReadingRow {
    fn from(reading: &Reading) -> Self {
        Self {
            temperature: reading.temperature(),
            humidity: reading.humidity(),
            timestamp: reading.timestamp_string(),
        }
    }
}

/// Row-per-reading, column-per-field view of a history, in history order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingTable {
    columns: Vec<FieldMetadata>,
    rows: Vec<ReadingRow>,
}

impl ReadingTable {
    /// Build the table from readings ordered oldest first
    pub fn from_readings<'a, I>(readings: I) -> Self
    where
        I: IntoIterator<Item = &'a Reading>,
    {
        Self {
            columns: Self::standard_columns(),
            rows: readings.into_iter().map(ReadingRow::from).collect(),
        }
    }

    /// An empty table that still carries its column metadata
    pub fn empty() -> Self {
        Self {
            columns: Self::standard_columns(),
            rows: Vec::new(),
        }
    }

    /// The three columns every reading table has
    pub fn standard_columns() -> Vec<FieldMetadata> {
        vec![
            FieldMetadata::new(
                TEMPERATURE_COLUMN,
                "Temperature",
                "Air temperature",
                "°C",
                FieldType::Numerical,
                FieldPurpose::Value,
            ),
            FieldMetadata::new(
                HUMIDITY_COLUMN,
                "Humidity",
                "Relative humidity",
                "%",
                FieldType::Percentage,
                FieldPurpose::SecondaryValue,
            ),
            FieldMetadata::new(
                TIMESTAMP_COLUMN,
                "Timestamp",
                "Time the reading was taken",
                "",
                FieldType::Timestamp,
                FieldPurpose::Time,
            ),
        ]
    }

    pub fn columns(&self) -> &[FieldMetadata] {
        &self.columns
    }

    pub fn rows(&self) -> &[ReadingRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of a numeric column in row order, `None` for unknown or
    /// non-numeric columns
    pub fn column_values(&self, id: &str) -> Option<Vec<f64>> {
        match id {
            TEMPERATURE_COLUMN => Some(self.rows.iter().map(|r| r.temperature).collect()),
            HUMIDITY_COLUMN => Some(self.rows.iter().map(|r| r.humidity).collect()),
            _ => None,
        }
    }
}

impl Default for ReadingTable {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_preserves_reading_order() {
        let readings = vec![
            Reading::parse(-27.0, 80.0, "2024-01-01 00:00:00").unwrap(),
            Reading::parse(-26.0, 82.0, "2024-01-01 00:00:10").unwrap(),
        ];
        let table = ReadingTable::from_readings(&readings);

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].timestamp, "2024-01-01 00:00:00");
        assert_eq!(table.rows()[1].temperature, -26.0);
        assert_eq!(table.column_values(HUMIDITY_COLUMN), Some(vec![80.0, 82.0]));
        assert_eq!(table.column_values(TIMESTAMP_COLUMN), None);
    }

    #[test]
    fn test_empty_table_keeps_columns() {
        let table = ReadingTable::empty();
        assert!(table.is_empty());
        let ids: Vec<&str> = table.columns().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["temperature", "humidity", "timestamp"]);
    }
}
