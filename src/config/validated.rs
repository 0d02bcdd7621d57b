//! Validated configuration after merging CLI and file sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::report::ColorMode;
use crate::topology::{Role, TargetSet};

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::file::{FileConfig, TargetsSection};

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::load`] to read the config file named by the CLI,
/// or [`ValidatedConfig::from_raw`] when the file is already parsed.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Path the configuration was read from
    pub source: PathBuf,

    /// Addresses of all monitored roles
    pub targets: TargetSet,

    /// Pause between cycles
    pub interval: Duration,

    /// Wall clock bound of a single probe
    pub probe_timeout: Duration,

    /// Console color mode
    pub color: ColorMode,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let targets: Vec<String> = self
            .targets
            .iter()
            .map(|(role, address)| format!("{role}={address}"))
            .collect();

        write!(
            f,
            "Config {{ source: {}, interval: {}s, probe_timeout: {}s, color: {}, targets: [{}] }}",
            self.source.display(),
            self.interval.as_secs(),
            self.probe_timeout.as_secs(),
            self.color,
            targets.join(", "),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and a parsed file.
    ///
    /// CLI arguments take precedence over file values, which take precedence
    /// over built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any of the nine target addresses is missing or invalid
    /// - A duration is zero
    /// - The color mode is unknown
    pub fn from_raw(cli: &Cli, file: &FileConfig, source: &Path) -> Result<Self, ConfigError> {
        let targets = resolve_targets(&file.targets)?;

        let interval = resolve_seconds(
            "interval",
            cli.interval.or(file.monitor.interval),
            defaults::INTERVAL_SECS,
        )?;

        let probe_timeout = resolve_seconds(
            "probe_timeout",
            cli.probe_timeout.or(file.monitor.probe_timeout),
            defaults::PROBE_TIMEOUT_SECS,
        )?;

        let color = Self::resolve_color(cli, file)?;

        Ok(Self {
            source: source.to_path_buf(),
            targets,
            interval,
            probe_timeout,
            color,
            verbose: cli.verbose,
        })
    }

    /// Loads the config file named by `--config` (or the default path) and validates it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let path = cli
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(defaults::CONFIG_PATH));

        let file = FileConfig::load(&path)?;
        Self::from_raw(cli, &file, &path)
    }

    fn resolve_color(cli: &Cli, file: &FileConfig) -> Result<ColorMode, ConfigError> {
        // CLI takes precedence
        if let Some(color) = cli.color {
            return Ok(color.into());
        }

        file.output
            .color
            .as_deref()
            .map_or(Ok(ColorMode::default()), parse_color)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::file::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn resolve_targets(section: &TargetsSection) -> Result<TargetSet, ConfigError> {
    for role in Role::ALL {
        let address = section.get(role).ok_or(ConfigError::missing(role))?;
        validate_address(role, address)?;
    }

    TargetSet::try_from_fn(|role| section.get(role).map(|a| a.trim().to_string()))
        .map_err(ConfigError::missing)
}

/// Rejects values that `ping` would misread or that cannot be a host.
fn validate_address(role: Role, address: &str) -> Result<(), ConfigError> {
    let trimmed = address.trim();
    let reason = if trimmed.is_empty() {
        Some("must not be empty")
    } else if trimmed.starts_with('-') {
        Some("must not start with '-'")
    } else if trimmed
        .chars()
        .any(|c| c.is_whitespace() || c.is_control())
    {
        Some("must not contain whitespace or control characters")
    } else {
        None
    };

    reason.map_or(Ok(()), |reason| {
        Err(ConfigError::InvalidAddress {
            role,
            address: address.to_string(),
            reason,
        })
    })
}

fn resolve_seconds(
    field: &'static str,
    value: Option<u64>,
    default: u64,
) -> Result<Duration, ConfigError> {
    // Priority: CLI explicit > file > default
    let seconds = value.unwrap_or(default);

    if seconds == 0 {
        return Err(ConfigError::InvalidDuration {
            field,
            reason: "must be greater than 0".to_string(),
        });
    }

    Ok(Duration::from_secs(seconds))
}

fn parse_color(s: &str) -> Result<ColorMode, ConfigError> {
    match s.to_lowercase().as_str() {
        "auto" => Ok(ColorMode::Auto),
        "always" | "on" => Ok(ColorMode::Always),
        "never" | "off" => Ok(ColorMode::Never),
        _ => Err(ConfigError::InvalidColor {
            value: s.to_string(),
        }),
    }
}
