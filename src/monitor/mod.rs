//! Monitor loop.
//!
//! This module provides [`Monitor`], which drives evaluation and reporting on
//! a fixed interval until a shutdown future completes.

mod monitor_loop;

pub use monitor_loop::Monitor;
