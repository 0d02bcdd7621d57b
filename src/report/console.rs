//! Console rendering of messages.

use std::ffi::OsString;
use std::fmt;
use std::io::{self, IsTerminal, Write};

use chrono::{DateTime, Local, TimeZone};

use super::{Message, Severity};
use crate::time::{Clock, SystemClock};

const RED: &str = "\x1b[91m";
const GREEN: &str = "\x1b[92m";
const YELLOW: &str = "\x1b[93m";
const RESET: &str = "\x1b[0m";

/// Timestamp layout of console lines.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Destination for reported messages.
pub trait MessageSink {
    /// Emits one message.
    fn emit(&mut self, message: &Message);
}

/// Collects messages in memory.
impl MessageSink for Vec<Message> {
    fn emit(&mut self, message: &Message) {
        self.push(message.clone());
    }
}

/// When to colorize console output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Colorize only when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    /// Always colorize.
    Always,
    /// Never colorize.
    Never,
}

impl ColorMode {
    /// Resolves the mode against the current environment.
    #[must_use]
    pub fn enabled(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                !no_color_requested(std::env::var_os("NO_COLOR")) && io::stdout().is_terminal()
            }
        }
    }
}

/// `NO_COLOR` disables color only when set to a non-empty value.
fn no_color_requested(value: Option<OsString>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Always => f.write_str("always"),
            Self::Never => f.write_str("never"),
        }
    }
}

const fn color_code(severity: Severity) -> Option<&'static str> {
    match severity {
        Severity::Failure => Some(RED),
        Severity::Warning => Some(YELLOW),
        Severity::Success => Some(GREEN),
        Severity::Info => None,
    }
}

/// Renders `<timestamp> [<LABEL>] <text>`, optionally wrapped in ANSI color.
#[must_use]
pub fn render_line<Tz>(message: &Message, at: &DateTime<Tz>, color: bool) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let timestamp = at.format(TIMESTAMP_FORMAT);
    let label = message.label();

    match color_code(message.severity).filter(|_| color) {
        Some(code) => format!("{timestamp} {code}[{label}] {}{RESET}", message.text),
        None => format!("{timestamp} [{label}] {}", message.text),
    }
}

/// Writes rendered messages, one per line, stamped with local time.
///
/// Write failures are logged and otherwise ignored; the monitor keeps running.
pub struct ConsoleSink<W, C = SystemClock> {
    writer: W,
    clock: C,
    color: bool,
}

impl ConsoleSink<io::Stdout, SystemClock> {
    /// Creates a sink writing to stdout with the system clock.
    #[must_use]
    pub fn stdout(mode: ColorMode) -> Self {
        Self::new(io::stdout(), SystemClock, mode.enabled())
    }
}

impl<W, C> ConsoleSink<W, C>
where
    W: Write,
    C: Clock,
{
    /// Creates a sink over any writer and clock.
    #[must_use]
    pub const fn new(writer: W, clock: C, color: bool) -> Self {
        Self {
            writer,
            clock,
            color,
        }
    }

    /// Consumes the sink and returns the writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()
    }
}

impl<W, C> MessageSink for ConsoleSink<W, C>
where
    W: Write,
    C: Clock,
{
    fn emit(&mut self, message: &Message) {
        let at: DateTime<Local> = self.clock.now().into();
        let line = render_line(message, &at, self.color);

        if let Err(e) = self.write_line(&line) {
            tracing::error!("Failed to write report line: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FixedClock;
    use chrono::Utc;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap()
    }

    mod render {
        use super::*;

        #[test]
        fn plain_line_layout() {
            let line = render_line(&Message::failure("Core switch down"), &at(), false);
            assert_eq!(line, "2024-03-09 07:05:01 [FAIL] Core switch down");
        }

        #[test]
        fn labels_follow_severity() {
            let warn = render_line(&Message::warning("WAP down"), &at(), false);
            let ok = render_line(&Message::success("Everything is OK"), &at(), false);
            let info = render_line(&Message::new(Severity::Info, "started"), &at(), false);

            assert_eq!(warn, "2024-03-09 07:05:01 [WARN] WAP down");
            assert_eq!(ok, "2024-03-09 07:05:01 [INFO] Everything is OK");
            assert_eq!(info, "2024-03-09 07:05:01 [INFO] started");
        }

        #[test]
        fn color_wraps_label_and_text() {
            let line = render_line(&Message::failure("Firewall down"), &at(), true);
            assert_eq!(
                line,
                "2024-03-09 07:05:01 \x1b[91m[FAIL] Firewall down\x1b[0m"
            );
        }

        #[test]
        fn info_is_never_colored() {
            let line = render_line(&Message::new(Severity::Info, "started"), &at(), true);
            assert_eq!(line, "2024-03-09 07:05:01 [INFO] started");
        }
    }

    mod sink {
        use super::*;

        #[test]
        fn console_sink_writes_one_line_per_message() {
            let mut sink = ConsoleSink::new(Vec::new(), FixedClock::from_unix_secs(0), false);

            sink.emit(&Message::warning("WAP down"));
            sink.emit(&Message::warning("WiFi Controller down"));

            let output = String::from_utf8(sink.into_writer()).unwrap();
            let lines: Vec<&str> = output.lines().collect();
            assert_eq!(lines.len(), 2);
            assert!(lines[0].ends_with(" [WARN] WAP down"));
            assert!(lines[1].ends_with(" [WARN] WiFi Controller down"));
            // "YYYY-mm-dd HH:MM:SS" prefix
            assert_eq!(lines[0].find(" [").unwrap(), 19);
        }

        #[test]
        fn vec_sink_collects_messages() {
            let mut sink: Vec<Message> = Vec::new();
            sink.emit(&Message::success("Everything is OK"));

            assert_eq!(sink, vec![Message::success("Everything is OK")]);
        }
    }

    mod color_mode {
        use super::*;

        #[test]
        fn empty_no_color_is_ignored() {
            assert!(!no_color_requested(None));
            assert!(!no_color_requested(Some(OsString::new())));
            assert!(no_color_requested(Some(OsString::from("1"))));
        }

        #[test]
        fn explicit_modes() {
            assert!(ColorMode::Always.enabled());
            assert!(!ColorMode::Never.enabled());
        }

        #[test]
        fn default_is_auto() {
            assert_eq!(ColorMode::default(), ColorMode::Auto);
            assert_eq!(ColorMode::Auto.to_string(), "auto");
        }
    }
}
