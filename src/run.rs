//! Application execution logic.
//!
//! This module wires the validated configuration into a [`Monitor`] and runs
//! it until Ctrl+C or SIGTERM.

use std::time::Duration;

use thiserror::Error;
use tokio::signal;

use topo_watch::config::ValidatedConfig;
use topo_watch::monitor::Monitor;
use topo_watch::probe::PingProber;
use topo_watch::report::{ConsoleSink, MessageSink};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to create the async runtime.
    #[error("Failed to create Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Runtime options extracted from validated config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RuntimeOptions {
    interval: Duration,
    probe_timeout: Duration,
}

impl From<&ValidatedConfig> for RuntimeOptions {
    fn from(config: &ValidatedConfig) -> Self {
        Self {
            interval: config.interval,
            probe_timeout: config.probe_timeout,
        }
    }
}

/// Creates the runtime and blocks on [`execute`].
///
/// # Errors
///
/// Returns an error if the Tokio runtime cannot be created.
#[cfg(not(tarpaulin_include))]
pub fn run_blocking(config: ValidatedConfig) -> Result<(), RunError> {
    let runtime = tokio::runtime::Runtime::new().map_err(RunError::Runtime)?;
    runtime.block_on(execute(config));
    Ok(())
}

/// Runs the monitor against the configured topology until a shutdown signal.
///
/// Excluded from coverage - spawns real `ping` processes and waits for OS signals.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) {
    let options = RuntimeOptions::from(&config);
    let sink = ConsoleSink::stdout(config.color);
    let monitor = build_monitor(config, sink);

    tracing::info!(
        "Monitoring started (interval: {}s, probe timeout: {}s)",
        options.interval.as_secs(),
        options.probe_timeout.as_secs()
    );

    monitor.run(shutdown_signal()).await;
}

/// Creates the prober from runtime options.
fn build_prober(options: RuntimeOptions) -> PingProber {
    PingProber::new().with_timeout(Some(options.probe_timeout))
}

/// Creates the monitor from configuration, reporting into `sink`.
fn build_monitor<S: MessageSink>(config: ValidatedConfig, sink: S) -> Monitor<PingProber, S> {
    let options = RuntimeOptions::from(&config);
    Monitor::new(build_prober(options), config.targets, sink).with_interval(options.interval)
}

/// Returns a future that completes when a shutdown signal is received.
///
/// If a handler cannot be installed, that signal source is ignored and the
/// other one still ends the loop.
///
/// Excluded from coverage - requires OS signal handling.
#[cfg(not(tarpaulin_include))]
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("Shutdown signal received, stopping...");
}
