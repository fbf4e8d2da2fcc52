//! Dashboard: an ordered set of displayers rendered from one snapshot

use crate::distribution::DistributionDisplayer;
use crate::table::TableDisplayer;
use crate::trend_chart::{Metric, TrendChartDisplayer};
use crate::value_box::{ValueBoxDisplayer, ValueBoxKind};
use log::trace;
use polar_dash_core::{BoxedDisplayer, Displayer, EngineSnapshot};

/// Composes displayers into one frame.
///
/// Every displayer renders the same snapshot, so the value boxes, table and
/// charts of a frame always describe the same tick.
pub struct Dashboard {
    title: String,
    displayers: Vec<BoxedDisplayer>,
}

impl Dashboard {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            displayers: Vec::new(),
        }
    }

    /// Value boxes, table, both trend charts and the distribution
    pub fn standard() -> Self {
        Self::new("Polar Climate Dashboard")
            .with(ValueBoxDisplayer::new(ValueBoxKind::Temperature))
            .with(ValueBoxDisplayer::new(ValueBoxKind::Humidity))
            .with(ValueBoxDisplayer::new(ValueBoxKind::LastUpdate))
            .with(TableDisplayer::new())
            .with(TrendChartDisplayer::new(Metric::Temperature))
            .with(TrendChartDisplayer::new(Metric::Humidity))
            .with(DistributionDisplayer::new())
    }

    pub fn with(mut self, displayer: impl Displayer + 'static) -> Self {
        self.displayers.push(Box::new(displayer));
        self
    }

    pub fn displayer_ids(&self) -> Vec<&str> {
        self.displayers.iter().map(|d| d.id()).collect()
    }

    /// Render every displayer into one frame
    pub fn render(&self, snapshot: &EngineSnapshot) -> String {
        let mut sections = vec![format!("== {} (tick {}) ==", self.title, snapshot.tick())];
        for displayer in &self.displayers {
            trace!("Rendering {} for tick {}", displayer.id(), snapshot.tick());
            sections.push(displayer.render(snapshot));
        }
        sections.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polar_dash_core::Reading;

    #[test]
    fn test_standard_layout() {
        let dashboard = Dashboard::standard();
        assert_eq!(
            dashboard.displayer_ids(),
            vec![
                "value_box_temperature",
                "value_box_humidity",
                "value_box_last_update",
                "table",
                "trend_temperature",
                "trend_humidity",
                "distribution",
            ]
        );
    }

    #[test]
    fn test_frame_describes_one_tick() {
        let reading = Reading::parse(-26.4, 88.1, "2024-01-01 00:00:10").unwrap();
        let snapshot = EngineSnapshot::from_history(4, vec![reading]);
        let frame = Dashboard::standard().render(&snapshot);

        assert!(frame.starts_with("== Polar Climate Dashboard (tick 4) =="));
        assert!(frame.contains("-26.4 °C"));
        assert!(frame.contains("88.1 %"));
        assert_eq!(frame.matches("2024-01-01 00:00:10").count(), 4);
    }
}
