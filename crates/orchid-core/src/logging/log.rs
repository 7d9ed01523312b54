//! Leveled logging surface

use crate::types::Severity;

/// Severity-tagged logging
///
/// Implementations:
/// - `Logger`: named view over a shared `Configuration`
/// - `PrivateFileLogger`: logger that owns its own file
///
/// Only `log` is required; the level helpers forward to it. None of these
/// return errors: output failures are reported on the logger's diagnostics
/// sink. `fatal` terminates the process after emitting, unless the logger
/// was built with a different terminator.
pub trait Log: Send + Sync {
    /// Emit one message at the given severity
    fn log(&self, severity: Severity, message: &str);

    fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    fn ok(&self, message: &str) {
        self.log(Severity::Ok, message);
    }

    fn warn(&self, message: &str) {
        self.log(Severity::Warn, message);
    }

    fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }

    fn debug(&self, message: &str) {
        self.log(Severity::Debug, message);
    }

    fn fatal(&self, message: &str) {
        self.log(Severity::Fatal, message);
    }
}
