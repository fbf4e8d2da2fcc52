//! polar-dash-displayers: Text displayers for the polar-dash dashboard.
//!
//! Every displayer renders one published [`EngineSnapshot`]; none of them
//! asks the engine for a refresh.
//!
//! [`EngineSnapshot`]: polar_dash_core::EngineSnapshot

mod dashboard;
mod distribution;
pub mod stats;
mod table;
mod trend_chart;
mod value_box;

pub use dashboard::Dashboard;
pub use distribution::DistributionDisplayer;
pub use stats::{histogram, HistogramBin, TrendLine, DEFAULT_HISTOGRAM_BINS};
pub use table::TableDisplayer;
pub use trend_chart::{Metric, TrendChartDisplayer};
pub use value_box::{ValueBoxDisplayer, ValueBoxKind};

/// Text shown by displayers before the first reading arrives
pub const NO_DATA_TEXT: &str = "no data yet";
