//! Configuration file parsing.
//!
//! TOML is the native layout. A file with a `.json` extension is read as
//! the flat legacy layout: one object holding the nine target keys.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;
use crate::topology::Role;

/// Root configuration structure from the config file.
///
/// All fields are optional so that validation can name exactly what is
/// missing and CLI values can be merged on top.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Target addresses
    #[serde(default)]
    pub targets: TargetsSection,

    /// Monitoring configuration
    #[serde(default)]
    pub monitor: MonitorSection,

    /// Console output configuration
    #[serde(default)]
    pub output: OutputSection,
}

/// Target addresses, keyed by role.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetsSection {
    /// Perimeter firewall
    #[serde(alias = "firewall_ip")]
    pub firewall: Option<String>,
    /// Core switch
    pub core_switch: Option<String>,
    /// Primary datacenter
    pub internal_dc1: Option<String>,
    /// Secondary datacenter
    pub internal_dc2: Option<String>,
    /// DNS forwarder
    pub dns_forwarder: Option<String>,
    /// Wireless access point
    pub wap: Option<String>,
    /// WiFi controller
    pub wifi_controller: Option<String>,
    /// Primary external test target
    pub external_test_ip: Option<String>,
    /// Secondary external test target
    pub external_test_ip2: Option<String>,
}

impl TargetsSection {
    /// Returns the configured address for `role`.
    #[must_use]
    pub fn get(&self, role: Role) -> Option<&str> {
        let value = match role {
            Role::Firewall => &self.firewall,
            Role::CoreSwitch => &self.core_switch,
            Role::InternalDc1 => &self.internal_dc1,
            Role::InternalDc2 => &self.internal_dc2,
            Role::DnsForwarder => &self.dns_forwarder,
            Role::Wap => &self.wap,
            Role::WifiController => &self.wifi_controller,
            Role::ExternalTestIp => &self.external_test_ip,
            Role::ExternalTestIp2 => &self.external_test_ip2,
        };
        value.as_deref()
    }
}

/// Monitoring configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitorSection {
    /// Seconds between cycles
    pub interval: Option<u64>,

    /// Seconds a single probe may take
    pub probe_timeout: Option<u64>,
}

/// Console output configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// "auto", "always" or "never"
    pub color: Option<String>,
}

impl FileConfig {
    /// Loads configuration from a file, choosing the layout by extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::parse_json(&content)
        } else {
            Self::parse(&content)
        }
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    /// Parses the flat JSON layout, which carries targets only.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or has unknown keys.
    pub fn parse_json(content: &str) -> Result<Self, ConfigError> {
        let targets: TargetsSection = serde_json::from_str(content)?;
        Ok(Self {
            targets,
            ..Self::default()
        })
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# topo-watch configuration file

[targets]
# Address of every monitored device (all nine are required).
# Replace these examples with your own addresses or host names.
firewall = "192.168.1.1"
core_switch = "192.168.1.2"
internal_dc1 = "192.168.10.10"
internal_dc2 = "192.168.10.11"
dns_forwarder = "192.168.10.53"
wap = "192.168.20.10"
wifi_controller = "192.168.20.2"
external_test_ip = "1.1.1.1"
external_test_ip2 = "8.8.8.8"

[monitor]
# Seconds to wait between cycles (default: 5)
interval = 5

# Seconds a single probe may take before it counts as down (default: 10)
# probe_timeout = 10

[output]
# When to colorize console output: "auto", "always" or "never" (default: auto)
# color = "auto"
"#
    .to_string()
}
