//! End-to-end: sources, engine, scheduler and displayers working together

use polar_dash::{Dashboard, DataEngine, EngineConfig, EngineError, SessionManager, TickScheduler};
use polar_dash_core::Reading;
use polar_dash_sources::{ReplaySource, SimulatedSource};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

fn recorded() -> Vec<Reading> {
    vec![
        Reading::parse(-27.0, 80.0, "2024-01-01 00:00:00").unwrap(),
        Reading::parse(-26.0, 82.0, "2024-01-01 00:00:10").unwrap(),
        Reading::parse(-28.0, 75.0, "2024-01-01 00:00:20").unwrap(),
    ]
}

#[test]
fn test_capacity_two_replay_scenario() {
    let [r1, r2, r3] = <[Reading; 3]>::try_from(recorded()).unwrap();
    let config = EngineConfig::new(2, Duration::from_secs(10));
    let engine = DataEngine::new(config, Box::new(ReplaySource::from_readings(recorded()))).unwrap();

    assert_eq!(engine.latest(), Err(EngineError::NoData));

    engine.advance_tick();
    let first = engine.refresh_and_get().unwrap();
    assert_eq!(first.history(), &[r1]);
    assert_eq!(first.table().len(), 1);

    engine.advance_tick();
    let second = engine.refresh_and_get().unwrap();
    assert_eq!(second.history(), &[r1, r2]);
    assert_eq!(second.latest(), Some(&r2));

    engine.advance_tick();
    let third = engine.refresh_and_get().unwrap();
    assert_eq!(third.history(), &[r2, r3]);
    assert_eq!(third.latest(), Some(&r3));
    assert_eq!(third.table().rows()[0].timestamp, "2024-01-01 00:00:10");

    // The replay is exhausted: the failure surfaces, the last good views stay
    engine.advance_tick();
    assert!(matches!(
        engine.refresh_and_get(),
        Err(EngineError::SourceFailure { tick: 4, .. })
    ));
    assert!(Arc::ptr_eq(&third, &engine.snapshot()));
}

#[test]
fn test_every_displayer_reads_one_cached_snapshot() {
    let engine = DataEngine::new(
        EngineConfig::default(),
        Box::new(SimulatedSource::with_seed(42)),
    )
    .unwrap();
    engine.advance_tick();

    let dashboard = Dashboard::standard();
    let first = dashboard.render(&engine.refresh_and_get().unwrap());
    let second = dashboard.render(&engine.refresh_and_get().unwrap());

    assert_eq!(first, second);
    assert_eq!(engine.history().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_scheduled_session_fills_to_capacity() {
    let sessions = SessionManager::new();
    let config = EngineConfig::new(5, Duration::from_secs(10));
    let id = sessions
        .open_session(config, Box::new(SimulatedSource::with_seed(1)))
        .unwrap();
    let engine = sessions.engine(&id).unwrap();
    let updates = engine.subscribe();

    let (_tx, rx) = watch::channel(false);
    let ticks = TickScheduler::new(config.interval)
        .unwrap()
        .with_max_ticks(8)
        .run(Arc::clone(&engine), rx)
        .await;

    assert_eq!(ticks, 8);
    let published: Vec<_> = updates.try_iter().collect();
    assert_eq!(published.len(), 8);

    let last = engine.snapshot();
    assert_eq!(last.table().len(), 5);
    assert_eq!(last.history(), &published[7].history()[..]);
    // The three oldest readings are gone
    assert_eq!(last.history()[0], *published[3].latest().unwrap());
}
