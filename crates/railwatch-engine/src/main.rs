//! Headless engine binary for RailWatch.
//!
//! Wires the simulated positions feed to the dashboard state controller
//! and runs a bounded session, standing in for the browser frontend:
//! every tick is logged instead of rendered.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `railwatch-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Build the built-in rail network
//! 4. Construct the shared dashboard over the seed snapshot
//! 5. Construct the feed and register its listeners
//! 6. Schedule the startup notice and connect the feed
//! 7. Run until a bound is reached or Ctrl-C
//! 8. Disconnect the feed and log the final dashboard state

mod config;
mod error;
mod run;
mod tick_log;

use std::path::Path;

use railwatch_dashboard::{Dashboard, DashboardListener};
use railwatch_feed::{TrainFeed, seed_trains};
use railwatch_network::builtin_network;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::error::EngineError;
use crate::tick_log::TickLogger;

/// Location of the engine configuration file.
const CONFIG_PATH: &str = "railwatch-config.yaml";

/// Application entry point for the engine.
///
/// Initializes all subsystems, runs the bounded session, and logs the
/// final dashboard state.
///
/// # Errors
///
/// Returns an error if configuration loading fails.
#[tokio::main]
#[allow(clippy::too_many_lines)]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration (logged once logging is up).
    let (config, loaded_from_file) = load_config()?;

    // 2. Initialize structured logging. RUST_LOG overrides the
    //    configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("railwatch-engine starting");
    if loaded_from_file {
        info!(
            path = CONFIG_PATH,
            tick_interval_ms = config.feed.tick_interval_ms,
            feed_seed = config.feed.seed,
            max_ticks = config.run.max_ticks,
            "Configuration loaded"
        );
    } else {
        info!("Config file not found, using defaults");
    }

    // 3. Build the rail network.
    let network = builtin_network();
    info!(segments = network.segment_count(), "Rail network built");

    // 4. Construct the shared dashboard over the seed snapshot.
    let dashboard = Dashboard::new(config.dashboard, seed_trains());
    info!(trains = dashboard.trains().len(), "Dashboard constructed");

    // 5. Construct the feed and register its listeners.
    let feed = TrainFeed::new(config.feed, seed_trains());
    feed.add_listener(Box::new(DashboardListener::new(dashboard.clone())))
        .await;
    feed.add_listener(Box::new(TickLogger::new(network))).await;
    info!("Feed listeners registered");

    // 6. Schedule the startup notice and connect the feed.
    let _online_notice = dashboard.start_online_notice();
    feed.connect().await;

    // 7. Run until a bound is reached or Ctrl-C.
    let shutdown = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            warn!(error = %error, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };
    let result = run::run_until_bounds(&dashboard, config.run, shutdown).await;

    // 8. Disconnect the feed and log the final dashboard state.
    feed.disconnect().await;

    dashboard.with_state(|state| {
        let delayed = state.trains().iter().filter(|t| t.delay > 0.0).count();
        let kpis = state.kpis();
        info!(
            ticks = state.tick_count(),
            trains = state.trains().len(),
            delayed,
            avg_delay = kpis.avg_delay,
            utilization = kpis.utilization,
            notifications = state.notifications().len(),
            "Final dashboard state"
        );
    });

    info!(
        end_reason = ?result.end_reason,
        ticks = result.ticks_observed,
        "railwatch-engine shutdown complete"
    );

    Ok(())
}

/// Load the engine configuration from `railwatch-config.yaml`.
///
/// Returns the configuration and whether it came from the file; a
/// missing file falls back to defaults.
fn load_config() -> Result<(AppConfig, bool), EngineError> {
    let path = Path::new(CONFIG_PATH);
    if path.exists() {
        Ok((AppConfig::from_file(path)?, true))
    } else {
        Ok((AppConfig::default(), false))
    }
}
