//! Log records and their renderings

use std::fmt::{self, Write as _};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::format::FileFormat;
use super::severity::{Severity, COLOR_RESET};
use crate::error::OrchidResult;

/// A single message, built fresh for every logging call
///
/// Serializes to the JSON line shape
/// `{"Severity":"INFO","Text":"...","Module":"...","Time":"<RFC3339>"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LogRecord {
    pub severity: Severity,
    pub text: String,
    pub module: String,
    pub time: DateTime<Local>,
}

impl LogRecord {
    /// Create a record stamped with the current local time
    pub fn new(severity: Severity, module: impl Into<String>, text: impl Into<String>) -> Self {
        Self::at(severity, module, text, Local::now())
    }

    pub fn at(
        severity: Severity,
        module: impl Into<String>,
        text: impl Into<String>,
        time: DateTime<Local>,
    ) -> Self {
        Self {
            severity,
            text: text.into(),
            module: module.into(),
            time,
        }
    }

    /// `YYYY-MM-DD HH:MM:SS [SEVERITY] module: text` with trailing newline
    pub fn to_text_line(&self) -> String {
        format!(
            "{} [{}] {}: {}\n",
            self.time.format("%Y-%m-%d %H:%M:%S"),
            self.severity,
            self.module,
            self.text
        )
    }

    /// Compact JSON object with trailing newline
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        let mut line = serde_json::to_string(self)?;
        line.push('\n');
        Ok(line)
    }

    /// Encode for the log file in the given format
    pub fn encode(&self, format: FileFormat) -> OrchidResult<String> {
        match format {
            FileFormat::Text => Ok(self.to_text_line()),
            FileFormat::Json => Ok(self.to_json_line()?),
        }
    }

    /// Console rendering. With colors the module/severity header is wrapped
    /// in the severity's background color.
    pub fn to_console_line(&self, colors: bool) -> String {
        let mut line = String::with_capacity(64 + self.text.len());
        let _ = write!(line, "{} ", self.time.format("%Y/%m/%d %H:%M:%S"));
        if colors {
            let _ = write!(
                line,
                "{} {} {:<20} {:<6} {} {}",
                COLOR_RESET,
                self.severity.color_code(),
                self.module,
                self.severity,
                COLOR_RESET,
                self.text
            );
        } else {
            let _ = write!(line, "{:<20} {:<6} {}", self.module, self.severity, self.text);
        }
        line.push('\n');
        line
    }
}

/// Join displayable values with single spaces
pub fn sprint(args: &[&dyn fmt::Display]) -> String {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{}", arg);
    }
    out
}
