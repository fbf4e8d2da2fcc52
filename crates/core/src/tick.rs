//! Tick generation counter shared between the scheduler and the engine

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Monotonic tick counter.
///
/// Tick 0 means no tick has fired yet. Every advance invalidates whatever
/// snapshot was computed for the previous tick. Clones share the counter.
#[derive(Debug, Clone, Default)]
pub struct TickSignal {
    generation: Arc<AtomicU64>,
}

impl TickSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current tick number
    pub fn current(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Fire a tick and return its number
    pub fn advance(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::AcqRel) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_generation() {
        let signal = TickSignal::new();
        let other = signal.clone();
        assert_eq!(signal.current(), 0);
        assert_eq!(other.advance(), 1);
        assert_eq!(other.advance(), 2);
        assert_eq!(signal.current(), 2);
    }
}
