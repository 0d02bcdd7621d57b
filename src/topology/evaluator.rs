//! Topology evaluator.

use std::ops::ControlFlow;

use super::plan::{CHECK_PLAN, Check};
use super::{Outcome, Reachability, Role, Snapshot, TargetSet, Warning};
use crate::probe::Prober;

/// Walks a check plan with a [`Prober`] and produces a [`Snapshot`].
///
/// Probes are issued one at a time in plan order; later checks depend on
/// earlier results for whether they run at all. No retries and no extra
/// timeout are applied here.
///
/// # Type Parameters
///
/// * `P` - The [`Prober`] implementation
#[derive(Debug)]
pub struct Evaluator<P> {
    prober: P,
    plan: &'static [Check],
}

/// Statuses and warnings accumulated during one cycle.
#[derive(Default)]
struct Cycle {
    entries: Vec<(Role, Reachability)>,
    warnings: Vec<Warning>,
}

impl Cycle {
    fn record(&mut self, role: Role, status: Reachability) {
        self.entries.push((role, status));
    }

    fn warn(&mut self, role: Role, warning: Warning) {
        self.record(role, Reachability::Down);
        self.warnings.push(warning);
    }

    /// Short-circuited cycles report no warnings.
    fn halt(self, outcome: Outcome) -> Snapshot {
        Snapshot::new(outcome, self.entries, Vec::new())
    }

    fn finish(self) -> Snapshot {
        Snapshot::new(Outcome::Nominal, self.entries, self.warnings)
    }
}

impl<P: Prober> Evaluator<P> {
    /// Creates an evaluator for the standard [`CHECK_PLAN`].
    #[must_use]
    pub const fn new(prober: P) -> Self {
        Self::with_plan(prober, &CHECK_PLAN)
    }

    /// Creates an evaluator for a custom plan.
    #[must_use]
    pub const fn with_plan(prober: P, plan: &'static [Check]) -> Self {
        Self { prober, plan }
    }

    /// Runs one evaluation cycle against `targets`.
    pub async fn evaluate(&self, targets: &TargetSet) -> Snapshot {
        let mut cycle = Cycle::default();

        for check in self.plan {
            if let ControlFlow::Break(outcome) = self.run_check(check, targets, &mut cycle).await {
                tracing::debug!("Evaluation halted: {outcome:?}");
                return cycle.halt(outcome);
            }
        }

        cycle.finish()
    }

    async fn probe(&self, targets: &TargetSet, role: Role) -> bool {
        self.prober.probe(targets.address(role)).await
    }

    async fn run_check(
        &self,
        check: &Check,
        targets: &TargetSet,
        cycle: &mut Cycle,
    ) -> ControlFlow<Outcome> {
        match *check {
            Check::Gate { role, halt } => {
                if !self.probe(targets, role).await {
                    cycle.record(role, Reachability::Down);
                    return ControlFlow::Break(halt);
                }
            }
            Check::Required { role, halt } => {
                if !self.probe(targets, role).await {
                    cycle.record(role, Reachability::Down);
                    return ControlFlow::Break(halt);
                }
                cycle.record(role, Reachability::Reachable);
            }
            Check::Redundant {
                primary,
                secondary,
                primary_down,
                secondary_down,
                halt,
            } => {
                let primary_up = self.probe(targets, primary).await;
                let secondary_up = self.probe(targets, secondary).await;
                match (primary_up, secondary_up) {
                    (false, false) => return ControlFlow::Break(halt),
                    (false, true) => {
                        cycle.warn(primary, primary_down);
                        cycle.record(secondary, Reachability::Reachable);
                    }
                    (true, up) => {
                        cycle.record(primary, Reachability::Reachable);
                        if up {
                            cycle.record(secondary, Reachability::Reachable);
                        } else {
                            cycle.warn(secondary, secondary_down);
                        }
                    }
                }
            }
            Check::Optional { role, warning } => {
                if self.probe(targets, role).await {
                    cycle.record(role, Reachability::Reachable);
                } else {
                    cycle.warn(role, warning);
                }
            }
            Check::Fallback { primary, secondary } => {
                if self.probe(targets, primary).await {
                    cycle.record(primary, Reachability::Reachable);
                } else {
                    cycle.record(primary, Reachability::NotReachable);
                    let status = if self.probe(targets, secondary).await {
                        Reachability::Reachable
                    } else {
                        Reachability::NotReachable
                    };
                    cycle.record(secondary, status);
                }
            }
        }

        ControlFlow::Continue(())
    }
}

#[cfg(test)]
#[path = "evaluator_tests.rs"]
mod tests;
