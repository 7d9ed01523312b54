//! Orchid Core
//!
//! Severity-tagged console logging with optional file mirroring.
//! Messages go to the console (ANSI-colored by default) and, when a file is
//! configured, are mirrored to it as plain text or line-delimited JSON.
//!
//! ## Shared configuration
//!
//! Loggers are named views over one `Configuration`. The file destination,
//! its encoding and the color policy live there, so pointing one logger at
//! a new file redirects every logger built from the same configuration:
//!
//! ```rust,no_run
//! use orchid_core::{Configuration, FileFormat, Log, Logger};
//!
//! let config = Configuration::create();
//! let api = Logger::new("api", config.clone())?;
//! let db = Logger::new("database", config.clone())?;
//!
//! api.set_log_file("app.json", FileFormat::Json)?;
//! db.ok("transaction committed"); // lands in app.json too
//!
//! config.shutdown()?;
//! # Ok::<(), orchid_core::OrchidError>(())
//! ```
//!
//! The `global` module wraps one process-wide logger for programs that do
//! not want to pass a logger around, and the `info!`/`warn!`/... macros
//! accept any number of `Display` arguments.

pub mod types;
pub mod error;
pub mod sink;
pub mod config;
pub mod logging;
pub mod global;

// Re-export commonly used types
pub use types::{FileFormat, LogRecord, Severity, UnknownSeverity};

pub use error::{OrchidError, OrchidResult, ValidationError};

pub use sink::{FileSink, MemorySink, NullSink, SharedSink, Sink, StderrSink, StdoutSink};

pub use config::{Configuration, LogSettings};

pub use logging::{
    Log, Logger, PrivateFileLogger,
    Terminator, SharedTerminator, ProcessTerminator, NoopTerminator,
};
