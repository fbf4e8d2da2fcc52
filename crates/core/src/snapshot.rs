//! Point-in-time views published by one refresh cycle

use crate::error::EngineError;
use polar_dash_types::{Reading, ReadingTable};
use serde::Serialize;
use serde_json::Value;

/// The three co-derived views of one history state.
///
/// History, table and latest reading always come from the same buffer
/// state, so a consumer can never pair a table from one tick with a latest
/// reading from another.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineSnapshot {
    tick: u64,
    history: Vec<Reading>,
    #[serde(skip)]
    table: ReadingTable,
    latest: Option<Reading>,
}

impl EngineSnapshot {
    /// Snapshot published before the first tick
    pub fn empty() -> Self {
        Self {
            tick: 0,
            history: Vec::new(),
            table: ReadingTable::empty(),
            latest: None,
        }
    }

    /// Derive every view from one copy of the history (oldest first)
    pub fn from_history(tick: u64, history: Vec<Reading>) -> Self {
        let table = ReadingTable::from_readings(&history);
        let latest = history.last().copied();
        Self {
            tick,
            history,
            table,
            latest,
        }
    }

    /// Tick this snapshot was computed for
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn history(&self) -> &[Reading] {
        &self.history
    }

    pub fn table(&self) -> &ReadingTable {
        &self.table
    }

    pub fn latest(&self) -> Option<&Reading> {
        self.latest.as_ref()
    }

    /// Latest reading, or [`EngineError::NoData`] before the first tick
    pub fn require_latest(&self) -> Result<&Reading, EngineError> {
        self.latest.as_ref().ok_or(EngineError::NoData)
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Mapping handed to rendering layers: `{tick, history, latest}`
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "tick": self.tick,
            "history": self.history,
            "latest": self.latest,
        })
    }
}

impl Default for EngineSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}
