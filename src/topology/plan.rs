//! The ordered check plan.
//!
//! Each [`Check`] names the roles it probes and what a failure means for the
//! rest of the cycle. [`CHECK_PLAN`] is the topology this tool monitors;
//! the evaluator walks it front to back.

use super::{Outcome, Role, Warning};

/// One step of the check plan, tagged by its failure policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Failure records `down` and halts with `halt`. Success records nothing.
    Gate {
        /// Probed role.
        role: Role,
        /// Outcome on failure.
        halt: Outcome,
    },

    /// Failure records `down` and halts with `halt`. Success records `reachable`.
    Required {
        /// Probed role.
        role: Role,
        /// Outcome on failure.
        halt: Outcome,
    },

    /// Redundant pair: halts only if both members are down.
    ///
    /// The secondary is always probed. When the primary is down the
    /// secondary's answer decides between halting and warning; when the
    /// primary is up the secondary is judged on its own.
    Redundant {
        /// Preferred member.
        primary: Role,
        /// Standby member.
        secondary: Role,
        /// Warning when only the primary is down.
        primary_down: Warning,
        /// Warning when only the secondary is down.
        secondary_down: Warning,
        /// Outcome when both are down.
        halt: Outcome,
    },

    /// Failure records `down` and a warning; the cycle continues.
    Optional {
        /// Probed role.
        role: Role,
        /// Warning on failure.
        warning: Warning,
    },

    /// Failover pair that never halts; failures record `not reachable`.
    ///
    /// The secondary is probed only when the primary is down.
    Fallback {
        /// Preferred target.
        primary: Role,
        /// Target probed when the primary fails.
        secondary: Role,
    },
}

impl Check {
    /// Returns every role this check may probe, in probe order.
    #[must_use]
    pub fn roles(&self) -> Vec<Role> {
        match *self {
            Self::Gate { role, .. } | Self::Required { role, .. } | Self::Optional { role, .. } => {
                vec![role]
            }
            Self::Redundant {
                primary, secondary, ..
            }
            | Self::Fallback { primary, secondary } => vec![primary, secondary],
        }
    }
}

/// The monitored topology, in dependency order.
///
/// Upstream failures end the cycle because nothing behind them can be
/// reached: a dead firewall makes every other probe meaningless.
pub const CHECK_PLAN: [Check; 7] = [
    Check::Gate {
        role: Role::Firewall,
        halt: Outcome::FirewallDown,
    },
    Check::Required {
        role: Role::CoreSwitch,
        halt: Outcome::CoreSwitchDown,
    },
    Check::Redundant {
        primary: Role::InternalDc1,
        secondary: Role::InternalDc2,
        primary_down: Warning::PrimaryDcDown,
        secondary_down: Warning::SecondaryDcDown,
        halt: Outcome::BothDcDown,
    },
    Check::Required {
        role: Role::DnsForwarder,
        halt: Outcome::DnsDown,
    },
    Check::Optional {
        role: Role::Wap,
        warning: Warning::WapDown,
    },
    Check::Optional {
        role: Role::WifiController,
        warning: Warning::WifiControllerDown,
    },
    Check::Fallback {
        primary: Role::ExternalTestIp,
        secondary: Role::ExternalTestIp2,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_covers_every_role_once_in_order() {
        let roles: Vec<Role> = CHECK_PLAN.iter().flat_map(Check::roles).collect();
        assert_eq!(roles, Role::ALL.to_vec());
    }

    #[test]
    fn firewall_is_the_first_gate() {
        assert!(matches!(
            CHECK_PLAN[0],
            Check::Gate {
                role: Role::Firewall,
                halt: Outcome::FirewallDown
            }
        ));
    }

    #[test]
    fn external_targets_never_halt() {
        assert!(matches!(CHECK_PLAN.last(), Some(Check::Fallback { .. })));
    }
}
