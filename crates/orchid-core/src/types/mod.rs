//! Core value types shared by loggers, sinks and the configuration store

mod severity;
mod format;
mod record;

pub use severity::{Severity, UnknownSeverity};
pub use format::FileFormat;
pub use record::{sprint, LogRecord};
