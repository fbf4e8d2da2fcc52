//! Fixed-capacity rolling history of readings

use crate::error::ConfigError;
use polar_dash_types::Reading;
use std::collections::VecDeque;

/// Ordered readings, oldest first, never longer than its capacity.
///
/// Appending to a full buffer evicts the oldest reading. Capacity is fixed
/// when the buffer is created.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    entries: VecDeque<Reading>,
    capacity: usize,
}

impl HistoryBuffer {
    /// Create an empty buffer; a zero capacity is rejected
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Append at the tail, returning the evicted head if the buffer was full
    pub fn append(&mut self, reading: Reading) -> Option<Reading> {
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(reading);
        evicted
    }

    /// Owned copy of the contents, oldest first
    pub fn snapshot(&self) -> Vec<Reading> {
        self.entries.iter().copied().collect()
    }

    pub fn latest(&self) -> Option<&Reading> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
