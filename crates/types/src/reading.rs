//! A single timestamped climate reading

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format used for timestamps whenever a reading leaves the process
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One temperature/humidity sample.
///
/// Readings are immutable once created. The timestamp is kept with second
/// precision so that the in-memory value and its serialized form agree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Temperature in °C
    temperature: f64,
    /// Relative humidity in %
    humidity: f64,
    /// Wall-clock time the reading was taken
    #[serde(with = "timestamp_serde")]
    timestamp: NaiveDateTime,
}

impl Reading {
    /// Create a reading, dropping any sub-second part of `timestamp`
    pub fn new(temperature: f64, humidity: f64, timestamp: NaiveDateTime) -> Self {
        Self {
            temperature,
            humidity,
            timestamp: timestamp.with_nanosecond(0).unwrap_or(timestamp),
        }
    }

    /// Create a reading stamped with the current local time
    pub fn now(temperature: f64, humidity: f64) -> Self {
        Self::new(temperature, humidity, Local::now().naive_local())
    }

    /// Create a reading from a `YYYY-MM-DD HH:MM:SS` timestamp string
    pub fn parse(
        temperature: f64,
        humidity: f64,
        timestamp: &str,
    ) -> Result<Self, chrono::ParseError> {
        let ts = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT)?;
        Ok(Self::new(temperature, humidity, ts))
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn humidity(&self) -> f64 {
        self.humidity
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Timestamp rendered as `YYYY-MM-DD HH:MM:SS`
    pub fn timestamp_string(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:.1} °C {:.1} %",
            self.timestamp_string(),
            self.temperature,
            self.humidity
        )
    }
}

/// Round to one decimal place, the precision readings are reported with
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

mod timestamp_serde {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&ts.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_reading_serialization_uses_second_precision_string() {
        let reading = Reading::parse(-27.0, 80.0, "2024-01-01 00:00:10").unwrap();
        let json = serde_json::to_value(reading).unwrap();

        assert_eq!(json["temperature"], -27.0);
        assert_eq!(json["humidity"], 80.0);
        assert_eq!(json["timestamp"], "2024-01-01 00:00:10");

        let back: Reading = serde_json::from_value(json).unwrap();
        assert_eq!(back, reading);
    }

    #[test]
    fn test_reading_drops_subsecond_part() {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_milli_opt(12, 30, 5, 750)
            .unwrap();
        let reading = Reading::new(-26.5, 90.1, ts);
        assert_eq!(reading.timestamp().nanosecond(), 0);
        assert_eq!(reading.timestamp_string(), "2024-01-01 12:30:05");
    }

    #[test]
    fn test_rejects_malformed_timestamp() {
        assert!(Reading::parse(-27.0, 80.0, "2024-01-01T00:00:00").is_err());
        let json = r#"{"temperature":-27.0,"humidity":80.0,"timestamp":"yesterday"}"#;
        assert!(serde_json::from_str::<Reading>(json).is_err());
    }

    #[test]
    fn test_round_to_tenth() {
        assert_eq!(round_to_tenth(-27.34), -27.3);
        assert_eq!(round_to_tenth(94.96), 95.0);
    }
}
