//! Configuration layer for topo-watch.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - Config file parsing, TOML or flat JSON ([`FileConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Tuning values (`interval`, `probe_timeout`, `color`) are resolved with the
//! following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **Config file**
//! 3. **Built-in defaults**
//!
//! Target addresses come from the config file only. All nine are required;
//! a missing one stops the program before the first cycle.

mod cli;
pub mod defaults;
mod error;
mod file;
mod validated;

#[cfg(test)]
mod file_tests;

pub use cli::{Cli, ColorArg, Command};
pub use error::ConfigError;
pub use file::{FileConfig, MonitorSection, OutputSection, TargetsSection, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
