//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::report::ColorMode;

use super::defaults;

/// topo-watch: network topology reachability monitor
///
/// Probes the firewall, core switch, datacenters, DNS forwarder, wireless
/// infrastructure and external targets, and prints status transitions.
#[derive(Debug, Parser)]
#[command(name = "topo-watch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to configuration file (`.json` selects the flat JSON layout)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Seconds to wait between cycles
    #[arg(long)]
    pub interval: Option<u64>,

    /// Seconds a single probe may take before it counts as down
    #[arg(long = "probe-timeout")]
    pub probe_timeout: Option<u64>,

    /// When to colorize console output
    #[arg(long, value_enum)]
    pub color: Option<ColorArg>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for topo-watch
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_PATH)]
        output: PathBuf,
    },
}

/// Color argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    /// Color when stdout is a terminal
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl From<ColorArg> for ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
