//! topo-watch: network topology reachability monitor
//!
//! A library for probing a fixed topology of network devices in dependency
//! order and reporting status transitions to an operator console.

pub mod config;
pub mod monitor;
pub mod probe;
pub mod report;
pub mod time;
pub mod topology;
