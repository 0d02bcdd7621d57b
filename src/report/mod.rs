//! Reporting layer.
//!
//! This module provides:
//! - Message types ([`Message`], [`Severity`], [`Label`])
//! - Change detection and message selection ([`report`], [`select_messages`])
//! - Rendering boundary and console output ([`MessageSink`], [`ConsoleSink`], [`render_line`])

mod console;
mod message;
mod reporter;

pub use console::{ColorMode, ConsoleSink, MessageSink, TIMESTAMP_FORMAT, render_line};
pub use message::{Label, Message, Severity};
pub use reporter::{report, select_messages};
