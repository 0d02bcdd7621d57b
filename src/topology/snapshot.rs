//! Status snapshot produced by one evaluation cycle.

use std::fmt;

use super::Role;

/// Probe result recorded for a single role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reachability {
    /// The target answered.
    Reachable,
    /// An internal target did not answer.
    Down,
    /// An external test target did not answer.
    NotReachable,
}

impl Reachability {
    /// Returns the legacy status text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reachable => "reachable",
            Self::Down => "down",
            Self::NotReachable => "not reachable",
        }
    }
}

impl fmt::Display for Reachability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an evaluation cycle ended.
///
/// Every variant except [`Outcome::Nominal`] is a short-circuit: the remaining
/// checks of that cycle were skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Firewall did not answer.
    FirewallDown,
    /// Core switch did not answer.
    CoreSwitchDown,
    /// Neither datacenter answered.
    BothDcDown,
    /// DNS forwarder did not answer.
    DnsDown,
    /// Every check ran ("everything ok"), warnings notwithstanding.
    Nominal,
}

/// Degraded but non-fatal condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Warning {
    /// Primary datacenter down, secondary up.
    PrimaryDcDown,
    /// Secondary datacenter down, primary up.
    SecondaryDcDown,
    /// Wireless access point down.
    WapDown,
    /// WiFi controller down.
    WifiControllerDown,
}

impl Warning {
    /// Returns the operator-facing text.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PrimaryDcDown => "Primary DC down",
            Self::SecondaryDcDown => "Second DC down",
            Self::WapDown => "WAP down",
            Self::WifiControllerDown => "WiFi Controller down",
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Per-role statuses and warnings of one evaluation cycle.
///
/// Snapshots are compared by full structural equality to decide whether
/// anything changed since the last report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    outcome: Outcome,
    entries: Vec<(Role, Reachability)>,
    warnings: Vec<Warning>,
}

impl Snapshot {
    /// Builds a snapshot from its parts.
    ///
    /// The evaluator is the usual producer; direct construction exists for
    /// callers that need synthetic snapshots.
    #[must_use]
    pub const fn new(
        outcome: Outcome,
        entries: Vec<(Role, Reachability)>,
        warnings: Vec<Warning>,
    ) -> Self {
        Self {
            outcome,
            entries,
            warnings,
        }
    }

    /// Returns how the cycle ended.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the status recorded for `role`, if that role was recorded.
    #[must_use]
    pub fn status(&self, role: Role) -> Option<Reachability> {
        self.entries
            .iter()
            .find_map(|(r, status)| (*r == role).then_some(*status))
    }

    /// Returns whether `role` was recorded with `status`.
    #[must_use]
    pub fn is(&self, role: Role, status: Reachability) -> bool {
        self.status(role) == Some(status)
    }

    /// Returns recorded statuses in recording order.
    #[must_use]
    pub fn entries(&self) -> &[(Role, Reachability)] {
        &self.entries
    }

    /// Returns accumulated warnings in evaluation order.
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Returns true if the cycle reached the final step ("everything ok").
    #[must_use]
    pub const fn is_all_clear(&self) -> bool {
        matches!(self.outcome, Outcome::Nominal)
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields: Vec<String> = self
            .entries
            .iter()
            .map(|(role, status)| format!("{role}: {status}"))
            .collect();

        match self.outcome {
            Outcome::BothDcDown => fields.push("dc: both down".to_string()),
            Outcome::Nominal => {
                if self.warnings.is_empty() {
                    fields.push("warnings: none".to_string());
                } else {
                    let list: Vec<&str> = self.warnings.iter().map(|w| w.message()).collect();
                    fields.push(format!("warnings: [{}]", list.join(", ")));
                }
                fields.push("status: everything ok".to_string());
            }
            Outcome::FirewallDown | Outcome::CoreSwitchDown | Outcome::DnsDown => {}
        }

        write!(f, "{{{}}}", fields.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reachability_texts() {
        assert_eq!(Reachability::Reachable.to_string(), "reachable");
        assert_eq!(Reachability::Down.to_string(), "down");
        assert_eq!(Reachability::NotReachable.to_string(), "not reachable");
    }

    #[test]
    fn warning_catalog_texts() {
        assert_eq!(Warning::PrimaryDcDown.to_string(), "Primary DC down");
        assert_eq!(Warning::SecondaryDcDown.to_string(), "Second DC down");
        assert_eq!(Warning::WapDown.to_string(), "WAP down");
        assert_eq!(Warning::WifiControllerDown.to_string(), "WiFi Controller down");
    }

    #[test]
    fn status_lookup() {
        let snapshot = Snapshot::new(
            Outcome::DnsDown,
            vec![
                (Role::CoreSwitch, Reachability::Reachable),
                (Role::DnsForwarder, Reachability::Down),
            ],
            vec![],
        );

        assert_eq!(snapshot.status(Role::CoreSwitch), Some(Reachability::Reachable));
        assert!(snapshot.is(Role::DnsForwarder, Reachability::Down));
        assert_eq!(snapshot.status(Role::Wap), None);
        assert!(!snapshot.is_all_clear());
    }

    #[test]
    fn equality_covers_warnings() {
        let a = Snapshot::new(Outcome::Nominal, vec![], vec![Warning::WapDown]);
        let b = Snapshot::new(Outcome::Nominal, vec![], vec![]);

        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    mod display {
        use super::*;

        #[test]
        fn firewall_down() {
            let snapshot = Snapshot::new(
                Outcome::FirewallDown,
                vec![(Role::Firewall, Reachability::Down)],
                vec![],
            );
            assert_eq!(snapshot.to_string(), "{firewall: down}");
        }

        #[test]
        fn both_datacenters_down() {
            let snapshot = Snapshot::new(
                Outcome::BothDcDown,
                vec![(Role::CoreSwitch, Reachability::Reachable)],
                vec![],
            );
            assert_eq!(
                snapshot.to_string(),
                "{core_switch: reachable, dc: both down}"
            );
        }

        #[test]
        fn nominal_without_warnings() {
            let snapshot = Snapshot::new(
                Outcome::Nominal,
                vec![(Role::ExternalTestIp, Reachability::Reachable)],
                vec![],
            );
            assert_eq!(
                snapshot.to_string(),
                "{external_test_ip: reachable, warnings: none, status: everything ok}"
            );
        }

        #[test]
        fn nominal_with_warnings() {
            let snapshot = Snapshot::new(
                Outcome::Nominal,
                vec![(Role::Wap, Reachability::Down)],
                vec![Warning::WapDown, Warning::WifiControllerDown],
            );
            assert_eq!(
                snapshot.to_string(),
                "{wap: down, warnings: [WAP down, WiFi Controller down], status: everything ok}"
            );
        }
    }
}
