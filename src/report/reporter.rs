//! Change reporter.
//!
//! Turns a snapshot into the messages an operator sees, and nothing at all
//! when the snapshot equals the one reported last.

use super::Message;
use crate::topology::{Outcome, Reachability, Role, Snapshot};

/// Returns the messages to emit for `current`, given the last reported snapshot.
///
/// Empty when `current` equals `previous`; otherwise see [`select_messages`].
#[must_use]
pub fn report(current: &Snapshot, previous: Option<&Snapshot>) -> Vec<Message> {
    if previous == Some(current) {
        return Vec::new();
    }
    select_messages(current)
}

/// Selects messages for a snapshot by fixed priority.
///
/// The first matching rule wins, however many conditions hold at once:
///
/// 1. core switch down
/// 2. firewall down
/// 3. both datacenters down
/// 4. DNS forwarder down
/// 5. both external targets not reachable
/// 6. primary external target not reachable
/// 7. one warning message per accumulated warning
/// 8. "Everything is OK"
#[must_use]
pub fn select_messages(snapshot: &Snapshot) -> Vec<Message> {
    let external_down = snapshot.is(Role::ExternalTestIp, Reachability::NotReachable);

    let exclusive = if snapshot.is(Role::CoreSwitch, Reachability::Down) {
        Some(Message::failure("Core switch down"))
    } else if snapshot.is(Role::Firewall, Reachability::Down) {
        Some(Message::failure("Firewall down"))
    } else if snapshot.outcome() == Outcome::BothDcDown {
        Some(Message::failure("No DC available"))
    } else if snapshot.is(Role::DnsForwarder, Reachability::Down) {
        Some(Message::failure("DNS server down"))
    } else if external_down && snapshot.is(Role::ExternalTestIp2, Reachability::NotReachable) {
        Some(Message::failure("External test IPs not reachable"))
    } else if external_down {
        Some(Message::warning(
            "The first external test IP is not reachable",
        ))
    } else {
        None
    };

    if let Some(message) = exclusive {
        return vec![message];
    }

    if snapshot.warnings().is_empty() {
        return vec![Message::success("Everything is OK")];
    }

    snapshot
        .warnings()
        .iter()
        .map(|w| Message::warning(w.message()))
        .collect()
}

#[cfg(test)]
#[path = "reporter_tests.rs"]
mod tests;
