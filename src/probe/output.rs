//! Interpretation of `ping` output.
//!
//! Exit status alone is not trusted: some platforms exit 0 when a router
//! answers "Destination host unreachable", so the text is checked as well.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Matches the received counter of the ping summary line.
///
/// Linux prints `1 received`, BSD and macOS print `1 packets received`.
static RECEIVED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)\b(\d+)\s+(?:packets\s+)?received\b").expect("valid received regex")
});

/// Output dialect of the platform ping utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PingPlatform {
    /// Windows `ping.exe`: `-n <count>`, replies carry `TTL=`.
    Windows,
    /// Linux, BSD and macOS `ping`: `-c <count>`, summary carries a received count.
    Unix,
}

impl PingPlatform {
    /// Returns the dialect of the platform this binary was built for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    /// Returns the flag selecting the number of echo requests.
    #[must_use]
    pub const fn count_flag(self) -> &'static str {
        match self {
            Self::Windows => "-n",
            Self::Unix => "-c",
        }
    }
}

impl fmt::Display for PingPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "windows"),
            Self::Unix => write!(f, "unix"),
        }
    }
}

/// Decides whether a single-packet ping succeeded from its standard output.
///
/// - Any occurrence of "unreachable" (case-insensitive) is a failure
/// - Windows: success iff a reply line carries `TTL=`
/// - Unix: success iff the summary reports at least one received packet
#[must_use]
pub fn interpret_output(platform: PingPlatform, stdout: &str) -> bool {
    if stdout.to_lowercase().contains("unreachable") {
        return false;
    }

    match platform {
        PingPlatform::Windows => stdout.contains("TTL="),
        PingPlatform::Unix => RECEIVED
            .captures_iter(stdout)
            .filter_map(|caps| caps[1].parse::<u32>().ok())
            .any(|received| received > 0),
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
