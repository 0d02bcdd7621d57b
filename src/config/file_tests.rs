//! Tests for config file parsing.

use super::file::{FileConfig, default_config_template};
use crate::topology::Role;

const FULL_TOML: &str = r#"
    [targets]
    firewall = "10.0.0.1"
    core_switch = "10.0.0.2"
    internal_dc1 = "10.0.1.10"
    internal_dc2 = "10.0.1.11"
    dns_forwarder = "10.0.1.53"
    wap = "10.0.2.20"
    wifi_controller = "10.0.2.2"
    external_test_ip = "1.1.1.1"
    external_test_ip2 = "8.8.8.8"

    [monitor]
    interval = 15
    probe_timeout = 4

    [output]
    color = "never"
"#;

mod toml_layout {
    use super::*;

    #[test]
    fn parse_full_config() {
        let config = FileConfig::parse(FULL_TOML).unwrap();

        assert_eq!(config.targets.get(Role::Firewall), Some("10.0.0.1"));
        assert_eq!(config.targets.get(Role::ExternalTestIp2), Some("8.8.8.8"));
        assert_eq!(config.monitor.interval, Some(15));
        assert_eq!(config.monitor.probe_timeout, Some(4));
        assert_eq!(config.output.color.as_deref(), Some("never"));
    }

    #[test]
    fn sections_are_optional() {
        let config = FileConfig::parse("").unwrap();

        assert!(config.targets.get(Role::Firewall).is_none());
        assert!(config.monitor.interval.is_none());
        assert!(config.output.color.is_none());
    }

    #[test]
    fn firewall_ip_alias_is_accepted() {
        let config = FileConfig::parse(
            r#"
            [targets]
            firewall_ip = "10.0.0.1"
        "#,
        )
        .unwrap();

        assert_eq!(config.targets.get(Role::Firewall), Some("10.0.0.1"));
    }

    #[test]
    fn unknown_target_is_rejected() {
        let result = FileConfig::parse(
            r#"
            [targets]
            printer = "10.0.0.99"
        "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn unknown_section_is_rejected() {
        let result = FileConfig::parse("[alerts]\nemail = \"ops@example.com\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn wrong_type_is_rejected() {
        let result = FileConfig::parse("[monitor]\ninterval = \"five\"\n");
        assert!(result.is_err());
    }
}

mod json_layout {
    use super::*;

    #[test]
    fn parse_flat_legacy_object() {
        let json = r#"{
            "external_test_ip": "1.1.1.1",
            "external_test_ip2": "8.8.8.8",
            "internal_dc1": "10.0.1.10",
            "internal_dc2": "10.0.1.11",
            "dns_forwarder": "10.0.1.53",
            "firewall_ip": "10.0.0.1",
            "wap": "10.0.2.20",
            "wifi_controller": "10.0.2.2",
            "core_switch": "10.0.0.2"
        }"#;

        let config = FileConfig::parse_json(json).unwrap();

        for role in Role::ALL {
            assert!(config.targets.get(role).is_some(), "{role} missing");
        }
        assert_eq!(config.targets.get(Role::Firewall), Some("10.0.0.1"));
        assert!(config.monitor.interval.is_none());
    }

    #[test]
    fn malformed_json_is_rejected() {
        let result = FileConfig::parse_json("{ \"firewall\": ");
        assert!(matches!(
            result,
            Err(crate::config::ConfigError::JsonParse(_))
        ));
    }

    #[test]
    fn non_string_address_is_rejected() {
        let result = FileConfig::parse_json(r#"{ "firewall": 10 }"#);
        assert!(result.is_err());
    }
}

mod template {
    use super::*;

    #[test]
    fn template_parses_and_names_every_role() {
        let config = FileConfig::parse(&default_config_template()).unwrap();

        for role in Role::ALL {
            assert!(config.targets.get(role).is_some(), "{role} missing");
        }
        assert_eq!(config.monitor.interval, Some(5));
    }
}
