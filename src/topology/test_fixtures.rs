//! Shared test fixtures for evaluator and monitor tests.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::probe::Prober;
use crate::topology::{Role, TargetSet};

/// Target set where every address is the role's key.
pub fn targets() -> TargetSet {
    TargetSet::try_from_fn(|role| Some(role.key().to_string())).unwrap()
}

#[derive(Default)]
struct State {
    down: HashSet<String>,
    calls: Vec<String>,
}

/// Prober answering from a mutable set of down roles.
///
/// Clones share state, so a test can keep a handle after moving the prober
/// into an evaluator. Addresses are expected to come from [`targets`].
#[derive(Clone, Default)]
pub struct MockProber {
    state: Arc<Mutex<State>>,
}

impl MockProber {
    /// Every target answers.
    pub fn all_up() -> Self {
        Self::default()
    }

    /// The given roles do not answer.
    pub fn with_down(roles: &[Role]) -> Self {
        let prober = Self::default();
        prober.set_down(roles);
        prober
    }

    /// Replaces the set of roles that do not answer.
    pub fn set_down(&self, roles: &[Role]) {
        let mut state = self.state.lock().unwrap();
        state.down = roles.iter().map(|r| r.key().to_string()).collect();
    }

    /// Addresses probed so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Number of probes issued so far.
    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }

    /// Number of probes issued against `role`.
    pub fn calls_for(&self, role: Role) -> usize {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|address| *address == role.key())
            .count()
    }

    /// Forgets recorded calls.
    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }
}

impl Prober for MockProber {
    async fn probe(&self, address: &str) -> bool {
        let mut state = self.state.lock().unwrap();
        state.calls.push(address.to_string());
        !state.down.contains(address)
    }
}
