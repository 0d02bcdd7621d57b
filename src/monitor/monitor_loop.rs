//! Evaluate, report on change, sleep, repeat.

use std::future::Future;
use std::time::Duration;

use crate::config::defaults;
use crate::probe::Prober;
use crate::report::{MessageSink, report};
use crate::topology::{Evaluator, Snapshot, TargetSet};

/// Periodic topology monitor.
///
/// Each cycle evaluates the topology and, when the snapshot differs from
/// the last reported one, emits the reporter's messages to the sink. The
/// last reported snapshot lives in [`Monitor::run`] and is threaded through
/// [`Monitor::tick`] explicitly.
///
/// # Type Parameters
///
/// * `P` - The [`Prober`] implementation
/// * `S` - The [`MessageSink`] receiving reports
///
/// # Example
///
/// ```ignore
/// use topo_watch::monitor::Monitor;
/// use topo_watch::probe::PingProber;
/// use topo_watch::report::{ColorMode, ConsoleSink};
///
/// let monitor = Monitor::new(PingProber::new(), targets, ConsoleSink::stdout(ColorMode::Auto));
/// monitor.run(async {
///     let _ = tokio::signal::ctrl_c().await;
/// })
/// .await;
/// ```
pub struct Monitor<P, S> {
    evaluator: Evaluator<P>,
    targets: TargetSet,
    sink: S,
    interval: Duration,
}

impl<P, S> Monitor<P, S>
where
    P: Prober,
    S: MessageSink,
{
    /// Creates a monitor with the default interval.
    #[must_use]
    pub const fn new(prober: P, targets: TargetSet, sink: S) -> Self {
        Self {
            evaluator: Evaluator::new(prober),
            targets,
            sink,
            interval: defaults::interval(),
        }
    }

    /// Sets the pause between the end of one cycle and the start of the next.
    #[must_use]
    pub const fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Returns the configured interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Runs one cycle.
    ///
    /// Returns the new snapshot if it differed from `last_reported` and was
    /// reported, `None` if nothing changed.
    pub async fn tick(&mut self, last_reported: Option<&Snapshot>) -> Option<Snapshot> {
        let snapshot = self.evaluator.evaluate(&self.targets).await;
        tracing::debug!("Snapshot: {snapshot}");

        let messages = report(&snapshot, last_reported);
        if messages.is_empty() {
            return None;
        }

        for message in &messages {
            self.sink.emit(message);
        }
        Some(snapshot)
    }

    /// Runs cycles until `shutdown` completes.
    ///
    /// Both the running cycle and the pause are abandoned as soon as
    /// `shutdown` resolves.
    pub async fn run<F>(mut self, shutdown: F) -> S
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let mut last_reported: Option<Snapshot> = None;

        loop {
            let reported = tokio::select! {
                biased;

                () = &mut shutdown => break,
                reported = self.tick(last_reported.as_ref()) => reported,
            };

            if let Some(snapshot) = reported {
                last_reported = Some(snapshot);
            }

            tokio::select! {
                biased;

                () = &mut shutdown => break,
                () = tokio::time::sleep(self.interval) => {}
            }
        }

        tracing::info!("Monitor stopped");
        self.sink
    }
}

#[cfg(test)]
#[path = "monitor_tests.rs"]
mod tests;
