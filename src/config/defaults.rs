//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Default configuration file path.
pub const CONFIG_PATH: &str = "topo-watch.toml";

/// Default pause between cycles in seconds.
pub const INTERVAL_SECS: u64 = 5;

/// Default wall clock bound for a single probe in seconds.
pub const PROBE_TIMEOUT_SECS: u64 = 10;

/// Default pause between cycles as Duration.
#[must_use]
pub const fn interval() -> Duration {
    Duration::from_secs(INTERVAL_SECS)
}

/// Default probe bound as Duration.
#[must_use]
pub const fn probe_timeout() -> Duration {
    Duration::from_secs(PROBE_TIMEOUT_SECS)
}
