//! Data engine: binds a source, the rolling history and the tick signal into
//! one memoized refresh cycle

use crate::constants::{DEFAULT_CAPACITY, DEFAULT_REFRESH_INTERVAL};
use crate::data_source::BoxedReadingSource;
use crate::error::{ConfigError, EngineError, SourceError};
use crate::history::HistoryBuffer;
use crate::snapshot::EngineSnapshot;
use crate::tick::TickSignal;
use arc_swap::ArcSwap;
use crossbeam::channel::{self, Receiver, Sender};
use log::{debug, error, info, trace, warn};
use polar_dash_types::Reading;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Construction parameters for a [`DataEngine`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Number of readings kept in the rolling history
    pub capacity: usize,
    /// Time between scheduler ticks
    pub interval: Duration,
}

impl EngineConfig {
    pub fn new(capacity: usize, interval: Duration) -> Self {
        Self { capacity, interval }
    }

    /// Reject zero capacity or a zero interval
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.interval.is_zero() {
            return Err(ConfigError::NonPositiveInterval { secs: 0.0 });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            interval: DEFAULT_REFRESH_INTERVAL,
        }
    }
}

/// State only the refresh step may touch
struct RefreshState {
    source: BoxedReadingSource,
    history: HistoryBuffer,
    /// Last tick a refresh was attempted for
    last_attempt: u64,
    /// Failure of that attempt, replayed to later callers in the same tick
    last_failure: Option<SourceError>,
}

/// Memoizing refresh engine.
///
/// Each tick of the [`TickSignal`] allows exactly one refresh: pull a reading
/// from the source, append it to the history and publish a new
/// [`EngineSnapshot`]. Every read between ticks returns that same snapshot.
/// A failed refresh leaves the last good snapshot published.
pub struct DataEngine {
    config: EngineConfig,
    source_id: String,
    ticks: TickSignal,
    state: Mutex<RefreshState>,
    /// Last successfully computed snapshot (cheap Arc clone for readers)
    published: ArcSwap<EngineSnapshot>,
    subscribers: Mutex<Vec<Sender<Arc<EngineSnapshot>>>>,
}

impl DataEngine {
    /// Create an engine with its own tick signal
    pub fn new(config: EngineConfig, source: BoxedReadingSource) -> Result<Self, ConfigError> {
        config.validate()?;
        let history = HistoryBuffer::new(config.capacity)?;
        let source_id = source.metadata().id.clone();

        if !source.is_available() {
            warn!("Source {} reports it is unavailable", source_id);
        }

        info!(
            "Created data engine for source {} (capacity: {}, interval: {:?})",
            source_id, config.capacity, config.interval
        );

        let ticks = TickSignal::new();
        let last_attempt = ticks.current();
        Ok(Self {
            config,
            source_id,
            ticks,
            state: Mutex::new(RefreshState {
                source,
                history,
                last_attempt,
                last_failure: None,
            }),
            published: ArcSwap::from_pointee(EngineSnapshot::empty()),
            subscribers: Mutex::new(Vec::new()),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    pub fn current_tick(&self) -> u64 {
        self.ticks.current()
    }

    /// Fire a tick, invalidating the cached snapshot
    pub fn advance_tick(&self) -> u64 {
        self.ticks.advance()
    }

    /// Return the snapshot for the current tick, refreshing at most once per
    /// tick.
    ///
    /// Before the first tick this is the empty snapshot. If several ticks
    /// fired since the last refresh, a single refresh covers all of them.
    pub fn refresh_and_get(&self) -> Result<Arc<EngineSnapshot>, EngineError> {
        let cached = self.published.load_full();
        if cached.tick() >= self.ticks.current() {
            return Ok(cached);
        }

        let mut state = self.lock_state();

        // The tick may have moved on, or another caller refreshed it, while we waited
        let tick = self.ticks.current();
        let cached = self.published.load_full();
        if cached.tick() >= tick {
            return Ok(cached);
        }
        if state.last_attempt >= tick {
            if let Some(error) = &state.last_failure {
                return Err(EngineError::SourceFailure {
                    tick: state.last_attempt,
                    error: error.clone(),
                });
            }
        }

        let start = std::time::Instant::now();
        state.last_attempt = tick;
        let reading = match state.source.produce() {
            Ok(reading) => reading,
            Err(error) => {
                error!("Refresh for tick {} failed: {}", tick, error);
                state.last_failure = Some(error.clone());
                return Err(EngineError::SourceFailure { tick, error });
            }
        };
        state.last_failure = None;

        if let Some(evicted) = state.history.append(reading) {
            trace!("Evicted reading from {}", evicted.timestamp_string());
        }
        let snapshot = Arc::new(EngineSnapshot::from_history(tick, state.history.snapshot()));
        self.published.store(Arc::clone(&snapshot));
        // Publish under the refresh lock so subscribers see ticks in order
        self.publish(&snapshot);
        drop(state);

        debug!(
            "Tick {}: {} (history: {}/{})",
            tick,
            reading,
            snapshot.history().len(),
            self.config.capacity
        );
        trace!("Refresh cycle took {:?}", start.elapsed());

        Ok(snapshot)
    }

    /// Last published snapshot; never triggers a refresh
    pub fn snapshot(&self) -> Arc<EngineSnapshot> {
        self.published.load_full()
    }

    /// Latest reading of the last published snapshot
    pub fn latest(&self) -> Result<Reading, EngineError> {
        self.snapshot().require_latest().copied()
    }

    /// Copy of the live history buffer, oldest first
    pub fn history(&self) -> Vec<Reading> {
        self.lock_state().history.snapshot()
    }

    /// Receive every snapshot published from now on
    pub fn subscribe(&self) -> Receiver<Arc<EngineSnapshot>> {
        let (tx, rx) = channel::unbounded();
        self.lock_subscribers().push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock_subscribers().len()
    }

    fn publish(&self, snapshot: &Arc<EngineSnapshot>) {
        let mut subscribers = self.lock_subscribers();
        let before = subscribers.len();
        subscribers.retain(|tx| tx.send(Arc::clone(snapshot)).is_ok());
        let pruned = before - subscribers.len();
        if pruned > 0 {
            warn!("Dropped {} disconnected subscriber(s) of {}", pruned, self.source_id);
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, RefreshState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_subscribers(&self) -> MutexGuard<'_, Vec<Sender<Arc<EngineSnapshot>>>> {
        self.subscribers.lock().unwrap_or_else(|e| e.into_inner())
    }
}
