//! Wall clock abstraction.
//!
//! Console lines carry a local timestamp. [`Clock`] lets tests pin that
//! timestamp instead of reading the system time.

use std::time::SystemTime;

/// Source of the current wall clock time.
///
/// # Example
///
/// ```
/// use topo_watch::time::{Clock, SystemClock};
///
/// let now = SystemClock.now();
/// assert!(now >= std::time::SystemTime::UNIX_EPOCH);
/// ```
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> SystemTime;
}

/// Clock backed by [`SystemTime::now()`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub SystemTime);

impl FixedClock {
    /// Creates a clock frozen at `secs` seconds after the Unix epoch.
    #[must_use]
    pub fn from_unix_secs(secs: u64) -> Self {
        Self(SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(secs))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> SystemTime {
        self.0
    }
}
