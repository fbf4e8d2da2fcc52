//! Distribution of recent temperatures

use crate::stats::{histogram, DEFAULT_HISTOGRAM_BINS};
use crate::NO_DATA_TEXT;
use polar_dash_core::{Displayer, EngineSnapshot};
use polar_dash_types::TEMPERATURE_COLUMN;

/// Histogram of the temperatures in the current history
pub struct DistributionDisplayer {
    bins: usize,
}

impl DistributionDisplayer {
    pub fn new() -> Self {
        Self {
            bins: DEFAULT_HISTOGRAM_BINS,
        }
    }

    pub fn with_bins(bins: usize) -> Self {
        Self { bins: bins.max(1) }
    }
}

impl Default for DistributionDisplayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Displayer for DistributionDisplayer {
    fn id(&self) -> &str {
        "distribution"
    }

    fn name(&self) -> &str {
        "Recent Temperature Distribution"
    }

    fn render(&self, snapshot: &EngineSnapshot) -> String {
        let mut lines = vec![self.name().to_string()];
        let values = snapshot
            .table()
            .column_values(TEMPERATURE_COLUMN)
            .unwrap_or_default();

        let bins = histogram(&values, self.bins);
        if bins.is_empty() {
            lines.push(format!("  {}", NO_DATA_TEXT));
        }
        for bin in bins {
            lines.push(format!(
                "  {:>6.1} .. {:>6.1}  {:<5} {}",
                bin.lower,
                bin.upper,
                "#".repeat(bin.count),
                bin.count
            ));
        }
        lines.join("\n")
    }
}
