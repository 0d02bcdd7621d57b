//! Topology model and health evaluation.
//!
//! This module provides types and functions for:
//! - Naming monitored devices ([`Role`]) and their addresses ([`TargetSet`])
//! - Representing one cycle's result ([`Snapshot`], [`Reachability`], [`Outcome`], [`Warning`])
//! - The dependency-ordered check plan ([`Check`], [`CHECK_PLAN`])
//! - Running the plan against a prober ([`Evaluator`])

mod evaluator;
mod plan;
mod snapshot;
mod target;

pub use evaluator::Evaluator;
pub use plan::{CHECK_PLAN, Check};
pub use snapshot::{Outcome, Reachability, Snapshot, Warning};
pub use target::{Role, TargetSet};

#[cfg(test)]
pub(crate) mod test_fixtures;
