//! Bounded run supervisor.
//!
//! The feed owns the tick task, so the engine's run loop has nothing to
//! drive; it watches the dashboard's tick count and the wall clock, and
//! ends the session when a configured bound is hit or the shutdown
//! future resolves.

use std::future::Future;
use std::time::Duration;

use railwatch_dashboard::Dashboard;
use tracing::info;

use crate::config::RunConfig;

/// How often the supervisor re-checks the run bounds.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Why the run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Reached the configured tick limit.
    MaxTicksReached,
    /// Reached the configured wall-clock limit.
    MaxRuntimeReached,
    /// The shutdown future resolved (Ctrl-C).
    Interrupted,
}

/// Outcome of a bounded run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunResult {
    /// Why the run ended.
    pub end_reason: EndReason,
    /// Feed ticks the dashboard had observed when the run ended.
    pub ticks_observed: u64,
}

/// Watch the dashboard until a bound is hit or `shutdown` resolves.
///
/// Bounds of zero are unlimited; with both at zero the run continues
/// until shutdown.
pub async fn run_until_bounds(
    dashboard: &Dashboard,
    run: RunConfig,
    shutdown: impl Future<Output = ()>,
) -> RunResult {
    let started = tokio::time::Instant::now();
    info!(
        max_ticks = run.max_ticks,
        max_runtime_seconds = run.max_runtime_seconds,
        "run supervisor started"
    );

    tokio::pin!(shutdown);
    loop {
        // --- Check tick limit ---
        let ticks = dashboard.tick_count();
        if run.max_ticks > 0 && ticks >= run.max_ticks {
            info!(ticks, max_ticks = run.max_ticks, "tick limit reached");
            return RunResult {
                end_reason: EndReason::MaxTicksReached,
                ticks_observed: ticks,
            };
        }

        // --- Check wall-clock limit ---
        let elapsed = started.elapsed().as_secs();
        if run.max_runtime_seconds > 0 && elapsed >= run.max_runtime_seconds {
            info!(
                elapsed_seconds = elapsed,
                max_runtime_seconds = run.max_runtime_seconds,
                "runtime limit reached"
            );
            return RunResult {
                end_reason: EndReason::MaxRuntimeReached,
                ticks_observed: ticks,
            };
        }

        tokio::select! {
            () = &mut shutdown => {
                info!("shutdown signal received");
                return RunResult {
                    end_reason: EndReason::Interrupted,
                    ticks_observed: dashboard.tick_count(),
                };
            }
            () = tokio::time::sleep(POLL_INTERVAL) => {}
        }
    }
}
