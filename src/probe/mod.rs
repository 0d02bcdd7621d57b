//! Reachability probing.
//!
//! This module provides:
//! - The probing seam used by the evaluator ([`Prober`])
//! - A platform `ping` implementation ([`PingProber`])
//! - Pure interpretation of ping output ([`interpret_output`], [`PingPlatform`])

mod output;
mod ping;
mod prober;

pub use output::{PingPlatform, interpret_output};
pub use ping::PingProber;
pub use prober::Prober;
