//! polar-dash: A live-updating polar climate dashboard
//!
//! This library ties the workspace crates together:
//! - Reading sources and the rolling-window refresh engine (polar-dash-core)
//! - Built-in sources (polar-dash-sources)
//! - Text displayers for value boxes, table and charts (polar-dash-displayers)
//! - Configuration management and machine-readable reports

pub mod config;
pub mod report;

// Re-export commonly used types
pub use config::AppConfig;
pub use polar_dash_core::{
    DataEngine, EngineConfig, EngineError, EngineSnapshot, SessionManager, TickScheduler,
};
pub use polar_dash_displayers::Dashboard;
