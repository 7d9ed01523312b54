//! Message severities and their console colors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// ANSI sequence that clears any active color
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_INFO: &str = "\x1b[48;5;33m";
pub const COLOR_OK: &str = "\x1b[48;5;36m";
pub const COLOR_WARN: &str = "\x1b[48;5;3m";
pub const COLOR_ERROR: &str = "\x1b[48;5;1m";
pub const COLOR_FATAL: &str = "\x1b[48;5;1m";
pub const COLOR_DEBUG: &str = "\x1b[48;5;5m";

/// Severity of a log message
///
/// Severities are not ordered and never filter output: every call emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Ok,
    Warn,
    Error,
    Fatal,
    Debug,
}

impl Severity {
    /// All known severities
    pub const ALL: [Severity; 6] = [
        Severity::Info,
        Severity::Ok,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
        Severity::Debug,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Ok => "OK",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
            Severity::Debug => "DEBUG",
        }
    }

    /// Background color used for the console header of this severity
    pub fn color_code(&self) -> &'static str {
        match self {
            Severity::Ok => COLOR_OK,
            Severity::Warn => COLOR_WARN,
            Severity::Error => COLOR_ERROR,
            Severity::Fatal => COLOR_FATAL,
            Severity::Debug => COLOR_DEBUG,
            Severity::Info => COLOR_INFO,
        }
    }

    /// Color for a severity label read from outside the crate (e.g. a parsed
    /// log line). Unknown labels fall back to the INFO color.
    pub fn color_for_label(label: &str) -> &'static str {
        label
            .parse::<Severity>()
            .map(|s| s.color_code())
            .unwrap_or(COLOR_INFO)
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Severity::Fatal)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so width specifiers like `{:<6}` apply
        f.pad(self.as_str())
    }
}

/// Returned when a label does not name one of the six severities
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity: {0}")]
pub struct UnknownSeverity(pub String);

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|sev| sev.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSeverity(s.to_string()))
    }
}
