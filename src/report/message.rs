//! Operator-facing messages.

use std::fmt;

/// Presentation severity of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// A fatal topology condition.
    Failure,
    /// A degraded but non-fatal condition.
    Warning,
    /// Everything checked out.
    Success,
    /// Neutral information.
    Info,
}

impl Severity {
    /// Returns the console label for this severity.
    #[must_use]
    pub const fn label(self) -> Label {
        match self {
            Self::Failure => Label::Fail,
            Self::Warning => Label::Warn,
            Self::Success | Self::Info => Label::Info,
        }
    }
}

/// Console label printed in brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// `[INFO]`
    Info,
    /// `[WARN]`
    Warn,
    /// `[FAIL]`
    Fail,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => f.write_str("INFO"),
            Self::Warn => f.write_str("WARN"),
            Self::Fail => f.write_str("FAIL"),
        }
    }
}

/// A single reported message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Presentation severity.
    pub severity: Severity,
    /// Message text.
    pub text: String,
}

impl Message {
    /// Creates a message.
    #[must_use]
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
        }
    }

    /// Creates a failure message.
    #[must_use]
    pub fn failure(text: impl Into<String>) -> Self {
        Self::new(Severity::Failure, text)
    }

    /// Creates a warning message.
    #[must_use]
    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Severity::Warning, text)
    }

    /// Creates a success message.
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Severity::Success, text)
    }

    /// Returns the console label of this message.
    #[must_use]
    pub const fn label(&self) -> Label {
        self.severity.label()
    }
}
