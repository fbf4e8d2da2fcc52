//! Value boxes: the latest temperature, humidity and update time

use crate::NO_DATA_TEXT;
use polar_dash_core::{Displayer, EngineSnapshot, Reading};

/// Which field of the latest reading a value box shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueBoxKind {
    Temperature,
    Humidity,
    LastUpdate,
}

impl ValueBoxKind {
    fn title(&self) -> &'static str {
        match self {
            ValueBoxKind::Temperature => "Temperature",
            ValueBoxKind::Humidity => "Humidity",
            ValueBoxKind::LastUpdate => "Last Update",
        }
    }

    fn caption(&self) -> &'static str {
        match self {
            ValueBoxKind::Temperature => "Live Arctic Temperature",
            ValueBoxKind::Humidity => "Live Arctic Humidity",
            ValueBoxKind::LastUpdate => "Last Update Time",
        }
    }
}

/// Single-value box over the latest reading
pub struct ValueBoxDisplayer {
    kind: ValueBoxKind,
    id: String,
}

impl ValueBoxDisplayer {
    pub fn new(kind: ValueBoxKind) -> Self {
        let id = match kind {
            ValueBoxKind::Temperature => "value_box_temperature",
            ValueBoxKind::Humidity => "value_box_humidity",
            ValueBoxKind::LastUpdate => "value_box_last_update",
        };
        Self {
            kind,
            id: id.to_string(),
        }
    }

    pub fn kind(&self) -> ValueBoxKind {
        self.kind
    }

    /// The value line alone, e.g. `-27.0 °C`
    pub fn format_value(&self, latest: Option<&Reading>) -> String {
        let Some(reading) = latest else {
            return NO_DATA_TEXT.to_string();
        };
        match self.kind {
            ValueBoxKind::Temperature => format!("{:.1} °C", reading.temperature()),
            ValueBoxKind::Humidity => format!("{:.1} %", reading.humidity()),
            ValueBoxKind::LastUpdate => reading.timestamp_string(),
        }
    }
}

impl Displayer for ValueBoxDisplayer {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        self.kind.title()
    }

    fn render(&self, snapshot: &EngineSnapshot) -> String {
        format!(
            "{}\n  {}\n  {}",
            self.kind.title(),
            self.format_value(snapshot.latest()),
            self.kind.caption()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> EngineSnapshot {
        let reading = Reading::parse(-27.0, 80.0, "2024-01-01 00:00:10").unwrap();
        EngineSnapshot::from_history(1, vec![reading])
    }

    #[test]
    fn test_value_formats() {
        let snapshot = snapshot();
        let latest = snapshot.latest();
        assert_eq!(
            ValueBoxDisplayer::new(ValueBoxKind::Temperature).format_value(latest),
            "-27.0 °C"
        );
        assert_eq!(
            ValueBoxDisplayer::new(ValueBoxKind::Humidity).format_value(latest),
            "80.0 %"
        );
        assert_eq!(
            ValueBoxDisplayer::new(ValueBoxKind::LastUpdate).format_value(latest),
            "2024-01-01 00:00:10"
        );
    }

    #[test]
    fn test_no_data_yet() {
        let displayer = ValueBoxDisplayer::new(ValueBoxKind::Temperature);
        let rendered = displayer.render(&EngineSnapshot::empty());
        assert!(rendered.contains(NO_DATA_TEXT));
        assert!(rendered.starts_with("Temperature"));
    }
}
