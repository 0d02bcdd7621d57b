//! Prober backed by the platform `ping` utility.

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use super::{PingPlatform, Prober, interpret_output};
use crate::config::defaults;

/// Runs `ping` with a single-packet, single-attempt policy.
///
/// A non-zero exit status, a tool that cannot be spawned, output without a
/// success marker and an expired probe bound all resolve to `false`.
/// The child is killed if the probe future is dropped.
#[derive(Debug, Clone)]
pub struct PingProber {
    program: String,
    platform: PingPlatform,
    timeout: Option<Duration>,
}

impl Default for PingProber {
    fn default() -> Self {
        Self::new()
    }
}

impl PingProber {
    /// Creates a prober for the current platform with the default probe bound.
    #[must_use]
    pub fn new() -> Self {
        Self {
            program: "ping".to_string(),
            platform: PingPlatform::current(),
            timeout: Some(defaults::probe_timeout()),
        }
    }

    /// Overrides the executable (primarily for tests).
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Overrides the output dialect.
    #[must_use]
    pub const fn with_platform(mut self, platform: PingPlatform) -> Self {
        self.platform = platform;
        self
    }

    /// Sets the wall clock bound for one probe; `None` relies on the tool's own timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the configured probe bound.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn command(&self, address: &str) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg(self.platform.count_flag())
            .arg("1")
            .arg(address)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true);
        command
    }

    async fn run(&self, address: &str) -> bool {
        let output = match self.command(address).output().await {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!("Failed to run {} for {address}: {e}", self.program);
                return false;
            }
        };

        if !output.status.success() {
            tracing::debug!("{address}: {} exited with {}", self.program, output.status);
            return false;
        }

        interpret_output(self.platform, &String::from_utf8_lossy(&output.stdout))
    }
}

impl Prober for PingProber {
    async fn probe(&self, address: &str) -> bool {
        let reachable = match self.timeout {
            Some(limit) => {
                if let Ok(reachable) = tokio::time::timeout(limit, self.run(address)).await {
                    reachable
                } else {
                    tracing::warn!("{address}: probe exceeded {}s", limit.as_secs());
                    false
                }
            }
            None => self.run(address).await,
        };

        tracing::debug!(address, reachable, "probe finished");
        reachable
    }
}
