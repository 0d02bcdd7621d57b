//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

use crate::topology::Role;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations. All of them
/// are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to parse the JSON configuration.
    #[error("Failed to parse JSON config: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A role has no address.
    #[error("Missing target address: {role}. Set targets.{role} in the config file")]
    MissingTarget {
        /// The role without an address
        role: Role,
    },

    /// A role has an address that cannot be handed to the probe tool.
    #[error("Invalid address '{address}' for {role}: {reason}")]
    InvalidAddress {
        /// The role the address belongs to
        role: Role,
        /// The rejected address
        address: String,
        /// Reason for invalidity
        reason: &'static str,
    },

    /// Invalid duration value (zero).
    #[error("Invalid duration for {field}: {reason}")]
    InvalidDuration {
        /// Name of the field
        field: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Invalid color mode.
    #[error("Invalid color mode '{value}': expected auto, always, or never")]
    InvalidColor {
        /// The invalid value provided
        value: String,
    },
}

impl ConfigError {
    /// Creates a `MissingTarget` error.
    #[must_use]
    pub const fn missing(role: Role) -> Self {
        Self::MissingTarget { role }
    }
}
