use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, warn};
use polar_dash::config::AppConfig;
use polar_dash::report::snapshot_report;
use polar_dash::{Dashboard, SessionManager, TickScheduler};
use polar_dash_types::SourceConfig;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::watch;

/// polar-dash - A live-updating polar climate dashboard
#[derive(Parser, Debug, Clone)]
#[command(name = "polar-dash")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seconds between refreshes (overrides the config file)
    #[arg(short = 'i', long = "interval", value_name = "SECS", allow_negative_numbers = true)]
    interval: Option<f64>,

    /// Number of readings kept in the rolling history (overrides the config file)
    #[arg(short = 'c', long = "capacity", value_name = "N")]
    capacity: Option<usize>,

    /// Reading source to use with its default settings (simulated, wave, replay)
    #[arg(short = 's', long = "source", value_name = "ID")]
    source: Option<String>,

    /// Config file to load instead of the one in the user config directory
    #[arg(long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Stop after this many ticks
    #[arg(short = 'n', long = "ticks", value_name = "N")]
    ticks: Option<u64>,

    /// Print each snapshot as a JSON line instead of the text dashboard
    #[arg(long = "json")]
    json: bool,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    /// Write the effective configuration back to the config file and exit
    #[arg(long = "save-config")]
    save_config: bool,
}

/// Load the config file and apply command line overrides
fn effective_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };

    if let Some(interval) = cli.interval {
        config.update_interval_secs = interval;
    }
    if let Some(capacity) = cli.capacity {
        config.capacity = capacity;
    }
    if let Some(source_id) = &cli.source {
        config.source = match SourceConfig::default_for_type(source_id) {
            Some(source) => source,
            None => bail!(
                "Unknown source '{}', expected one of: {}",
                source_id,
                polar_dash_sources::builtin_registry().list_sources().join(", ")
            ),
        };
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();
    let config = effective_config(&cli)?;

    // Initialize logger with verbosity based on -d/--debug flag
    // Level 0 (default): the config file's log level, or warn only
    // Level 1: info (normal verbosity)
    // Level 2: debug (detailed)
    // Level 3+: trace (very detailed)
    let log_level = match cli.debug {
        0 => config.log_level.clone().unwrap_or_else(|| "warn".to_string()),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting polar-dash v{}", env!("CARGO_PKG_VERSION"));

    // Fail fast on bad parameters, before anything is started
    let engine_config = config.engine_config()?;

    if cli.save_config {
        match &cli.config {
            Some(path) => config.save_to_path(path)?,
            None => config.save()?,
        }
        println!("Configuration saved");
        return Ok(());
    }

    let registry = polar_dash_sources::builtin_registry();
    let source = registry.create_configured(&config.source)?;

    let sessions = SessionManager::new();
    let session = sessions.open_session(engine_config, source)?;
    let engine = sessions
        .engine(&session)
        .context("Session closed before it started")?;
    let snapshots = engine.subscribe();

    // Render every published snapshot off the async runtime
    let json = cli.json;
    let renderer = tokio::task::spawn_blocking(move || {
        let dashboard = Dashboard::standard();
        for snapshot in snapshots.iter() {
            if json {
                println!("{}", snapshot_report(&snapshot));
            } else {
                println!("{}\n", dashboard.render(&snapshot));
            }
        }
    });

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Interrupted, shutting down");
                let _ = shutdown_tx.send(true);
            }
            Err(e) => {
                warn!("Could not listen for Ctrl-C: {}", e);
                // Keep the sender alive so the scheduler is not shut down
                std::future::pending::<()>().await;
            }
        }
    });

    let mut scheduler = TickScheduler::new(engine_config.interval)?;
    if let Some(max_ticks) = cli.ticks {
        scheduler = scheduler.with_max_ticks(max_ticks);
    }
    let ticks = scheduler.spawn(Arc::clone(&engine), shutdown_rx).await?;

    info!("Ran {} ticks", ticks);

    // Dropping the last engine handle disconnects the renderer
    sessions.close_session(&session);
    drop(engine);
    renderer.await?;

    Ok(())
}
