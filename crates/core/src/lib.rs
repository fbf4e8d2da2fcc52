//! polar-dash-core: Reading sources, rolling history and the refresh engine.
//!
//! This crate contains the fundamental traits (ReadingSource, Displayer), the
//! source Registry, the fixed-capacity HistoryBuffer, the memoizing DataEngine and
//! the TickScheduler that drives it, plus per-session engine bookkeeping.

pub mod constants;
mod data_source;
mod displayer;
mod engine;
mod error;
mod history;
mod registry;
mod scheduler;
mod session;
mod snapshot;
mod tick;

pub use constants::{DEFAULT_CAPACITY, DEFAULT_REFRESH_INTERVAL, DEFAULT_REFRESH_INTERVAL_SECS};
pub use data_source::{BoxedReadingSource, FnSource, ReadingSource, SourceMetadata};
pub use displayer::{BoxedDisplayer, Displayer};
pub use engine::{DataEngine, EngineConfig};
pub use error::{ConfigError, EngineError, SourceError};
pub use history::HistoryBuffer;
pub use registry::{Registry, SourceFactory, SourceInfo};
pub use scheduler::TickScheduler;
pub use session::{SessionId, SessionManager};
pub use snapshot::EngineSnapshot;
pub use tick::TickSignal;

// Re-export types used in trait signatures for convenience
pub use polar_dash_types::{Reading, ReadingTable, SourceConfig};
