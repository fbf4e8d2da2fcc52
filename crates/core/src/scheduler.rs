//! Tick scheduler: fires the engine's tick at a fixed interval

use crate::engine::DataEngine;
use crate::error::ConfigError;
use log::{debug, error, info, trace};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Drives one engine on a fixed interval.
///
/// Ticks are serialized: a refresh always completes before the next tick is
/// considered, and a late tick pushes later ticks back instead of bursting,
/// so consecutive ticks are at least one interval apart.
#[derive(Debug, Clone)]
pub struct TickScheduler {
    interval: Duration,
    max_ticks: Option<u64>,
}

impl TickScheduler {
    /// Create a scheduler; a zero interval is rejected
    pub fn new(interval: Duration) -> Result<Self, ConfigError> {
        if interval.is_zero() {
            return Err(ConfigError::NonPositiveInterval { secs: 0.0 });
        }
        Ok(Self {
            interval,
            max_ticks: None,
        })
    }

    /// Stop on its own after `max_ticks` ticks
    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run the tick loop until shutdown is signalled (or the sender is
    /// dropped) or the tick limit is reached. Returns the number of ticks run.
    ///
    /// The first tick fires immediately.
    pub async fn run(&self, engine: Arc<DataEngine>, mut shutdown: watch::Receiver<bool>) -> u64 {
        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut ticks_run = 0u64;

        info!(
            "Scheduler started for source {} (interval: {:?})",
            engine.source_id(),
            self.interval
        );

        loop {
            if self.max_ticks.is_some_and(|max| ticks_run >= max) {
                debug!("Scheduler reached its limit of {} ticks", ticks_run);
                break;
            }

            tokio::select! {
                _ = interval.tick() => {
                    let start = Instant::now();
                    let tick = engine.advance_tick();
                    if let Err(e) = engine.refresh_and_get() {
                        error!("Error refreshing tick {}: {}", tick, e);
                    }
                    ticks_run += 1;
                    trace!("Tick cycle took {:?}", start.elapsed());
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!("Scheduler for source {} shutting down", engine.source_id());
                        break;
                    }
                }
            }
        }

        ticks_run
    }

    /// Spawn [`run`](Self::run) onto the current tokio runtime
    pub fn spawn(
        self,
        engine: Arc<DataEngine>,
        shutdown: watch::Receiver<bool>,
    ) -> JoinHandle<u64> {
        tokio::spawn(async move { self.run(engine, shutdown).await })
    }
}
