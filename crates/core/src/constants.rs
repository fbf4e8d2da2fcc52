//! Shared constants for the engine

use std::time::Duration;

/// Number of readings kept in the rolling history by default
pub const DEFAULT_CAPACITY: usize = 5;

/// Seconds between refresh ticks by default
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 10;

/// Default refresh interval as a Duration
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(DEFAULT_REFRESH_INTERVAL_SECS);
