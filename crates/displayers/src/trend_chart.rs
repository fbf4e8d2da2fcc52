//! Trend charts: one bar per reading plus the fitted trend line

use crate::stats::TrendLine;
use crate::NO_DATA_TEXT;
use polar_dash_core::{Displayer, EngineSnapshot};
use polar_dash_types::{HUMIDITY_COLUMN, TEMPERATURE_COLUMN};

const DEFAULT_BAR_WIDTH: usize = 30;

/// Which reading field a chart plots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Temperature,
    Humidity,
}

impl Metric {
    fn column(&self) -> &'static str {
        match self {
            Metric::Temperature => TEMPERATURE_COLUMN,
            Metric::Humidity => HUMIDITY_COLUMN,
        }
    }

    fn unit(&self) -> &'static str {
        match self {
            Metric::Temperature => "°C",
            Metric::Humidity => "%",
        }
    }
}

/// Text trend chart for one metric
pub struct TrendChartDisplayer {
    metric: Metric,
    bar_width: usize,
}

impl TrendChartDisplayer {
    pub fn new(metric: Metric) -> Self {
        Self {
            metric,
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }

    pub fn with_bar_width(mut self, bar_width: usize) -> Self {
        self.bar_width = bar_width.max(1);
        self
    }

    /// Values of this chart's metric, oldest first
    pub fn series(&self, snapshot: &EngineSnapshot) -> Vec<f64> {
        snapshot
            .table()
            .column_values(self.metric.column())
            .unwrap_or_default()
    }

    /// Trend over the series; `None` below two readings
    pub fn trend(&self, snapshot: &EngineSnapshot) -> Option<TrendLine> {
        TrendLine::fit(&self.series(snapshot))
    }

    fn bar(&self, value: f64, min: f64, max: f64) -> String {
        let span = max - min;
        let filled = if span > 0.0 {
            1 + (((value - min) / span) * (self.bar_width - 1) as f64).round() as usize
        } else {
            self.bar_width.div_ceil(2)
        };
        "█".repeat(filled.min(self.bar_width))
    }
}

impl Displayer for TrendChartDisplayer {
    fn id(&self) -> &str {
        match self.metric {
            Metric::Temperature => "trend_temperature",
            Metric::Humidity => "trend_humidity",
        }
    }

    fn name(&self) -> &str {
        match self.metric {
            Metric::Temperature => "Temperature Trend",
            Metric::Humidity => "Humidity Trend",
        }
    }

    fn render(&self, snapshot: &EngineSnapshot) -> String {
        let unit = self.metric.unit();
        let mut lines = vec![format!("{} ({})", self.name(), unit)];

        let values = self.series(snapshot);
        if values.is_empty() {
            lines.push(format!("  {}", NO_DATA_TEXT));
            return lines.join("\n");
        }

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        for (row, value) in snapshot.table().rows().iter().zip(&values) {
            lines.push(format!(
                "  {}  {:>6.1}  {}",
                row.timestamp,
                value,
                self.bar(*value, min, max)
            ));
        }

        match TrendLine::fit(&values) {
            Some(trend) => {
                let last = (values.len() - 1) as f64;
                lines.push(format!(
                    "  Trend: {:+.2} {}/reading ({:.1} -> {:.1})",
                    trend.slope,
                    unit,
                    trend.value_at(0.0),
                    trend.value_at(last)
                ));
            }
            None => lines.push("  Trend: needs at least 2 readings".to_string()),
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polar_dash_core::Reading;

    fn snapshot(temps: &[f64]) -> EngineSnapshot {
        let history = temps
            .iter()
            .enumerate()
            .map(|(i, t)| {
                Reading::parse(*t, 80.0, &format!("2024-01-01 00:00:{:02}", i * 10)).unwrap()
            })
            .collect();
        EngineSnapshot::from_history(temps.len() as u64, history)
    }

    #[test]
    fn test_single_point_has_no_trend() {
        let chart = TrendChartDisplayer::new(Metric::Temperature);
        let snapshot = snapshot(&[-27.0]);
        assert!(chart.trend(&snapshot).is_none());
        assert!(chart.render(&snapshot).contains("needs at least 2 readings"));
    }

    #[test]
    fn test_trend_over_history() {
        let chart = TrendChartDisplayer::new(Metric::Temperature);
        let snapshot = snapshot(&[-27.0, -26.0, -28.0]);
        let trend = chart.trend(&snapshot).unwrap();
        assert!((trend.slope + 0.5).abs() < 1e-9);

        let rendered = chart.render(&snapshot);
        assert_eq!(rendered.lines().count(), 5);
        assert!(rendered.contains("Trend: -0.50 °C/reading"));
    }

    #[test]
    fn test_bars_scale_between_min_and_max() {
        let chart = TrendChartDisplayer::new(Metric::Temperature).with_bar_width(10);
        assert_eq!(chart.bar(-30.0, -30.0, -25.0).chars().count(), 1);
        assert_eq!(chart.bar(-25.0, -30.0, -25.0).chars().count(), 10);
        assert_eq!(chart.bar(-27.0, -27.0, -27.0).chars().count(), 5);
    }

    #[test]
    fn test_humidity_chart_uses_humidity_column() {
        let chart = TrendChartDisplayer::new(Metric::Humidity);
        assert_eq!(chart.series(&snapshot(&[-27.0, -26.0])), vec![80.0, 80.0]);
        assert!(chart.render(&EngineSnapshot::empty()).contains(NO_DATA_TEXT));
    }
}
