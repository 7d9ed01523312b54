//! Module-scoped logger over a shared configuration
//!
//! A `Logger` is a named view: it owns only its module name. File
//! destination, format and colors come from the `Configuration` it was built
//! with, so `set_log_file` on one logger redirects every logger sharing that
//! configuration.

use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use super::log::Log;
use super::outputs::Outputs;
use super::terminator::SharedTerminator;
use crate::config::{validate_module_name, Configuration};
use crate::error::{OrchidResult, ValidationError};
use crate::sink::SharedSink;
use crate::types::{FileFormat, LogRecord, Severity};

/// Module name used before a logger has been initialized
pub const DEFAULT_MODULE: &str = "NO_NAME";

/// Named logger
///
/// # Example
///
/// ```
/// use orchid_core::{Configuration, Log, Logger};
///
/// let config = Configuration::create();
/// let logger = Logger::new("database", config)?;
/// logger.info("query executed");
/// logger.ok("transaction committed");
/// # Ok::<(), orchid_core::ValidationError>(())
/// ```
pub struct Logger {
    /// Held for the whole emission, not just while reading the name
    module: Mutex<String>,
    config: Arc<Configuration>,
    outputs: RwLock<Outputs>,
}

impl Logger {
    /// Create a logger for `module`. The name is trimmed and must be 1..=50
    /// characters.
    pub fn new(module: &str, config: Arc<Configuration>) -> Result<Self, ValidationError> {
        let module = validate_module_name(module)?;
        Ok(Self::with_module(module, config))
    }

    /// Create a logger named [`DEFAULT_MODULE`]
    pub fn unnamed(config: Arc<Configuration>) -> Self {
        Self::with_module(DEFAULT_MODULE.to_string(), config)
    }

    fn with_module(module: String, config: Arc<Configuration>) -> Self {
        Self {
            module: Mutex::new(module),
            config,
            outputs: RwLock::new(Outputs::default()),
        }
    }

    /// Replace the console sink (stderr by default)
    pub fn with_console(mut self, console: SharedSink) -> Self {
        self.outputs.get_mut().console = console;
        self
    }

    /// Replace the sink that receives file-write failures (stderr by default)
    pub fn with_diagnostics(mut self, diagnostics: SharedSink) -> Self {
        self.outputs.get_mut().diagnostics = diagnostics;
        self
    }

    /// Replace what runs after a FATAL message (process exit by default)
    pub fn with_terminator(mut self, terminator: SharedTerminator) -> Self {
        self.outputs.get_mut().terminator = terminator;
        self
    }

    /// [`Logger::with_console`] for a logger that is already shared
    pub fn set_console(&self, console: SharedSink) {
        self.outputs.write().console = console;
    }

    pub fn set_diagnostics(&self, diagnostics: SharedSink) {
        self.outputs.write().diagnostics = diagnostics;
    }

    pub fn set_terminator(&self, terminator: SharedTerminator) {
        self.outputs.write().terminator = terminator;
    }

    /// Rename this logger. On error the current name is kept.
    pub fn init(&self, module: &str) -> Result<(), ValidationError> {
        let module = validate_module_name(module)?;
        *self.module.lock() = module;
        Ok(())
    }

    pub fn module(&self) -> String {
        self.module.lock().clone()
    }

    pub fn configuration(&self) -> &Arc<Configuration> {
        &self.config
    }

    /// Point the shared configuration at `path` with `format`. Affects every
    /// logger using the same configuration.
    pub fn set_log_file(&self, path: &str, format: FileFormat) -> OrchidResult<()> {
        self.config.configure_file(path, format)
    }

    /// Same as [`Logger::set_log_file`] with the format given as its integer
    /// code. Codes other than 0 and 1 are rejected before anything changes.
    pub fn set_log_file_code(&self, path: &str, code: i32) -> OrchidResult<()> {
        let format = FileFormat::try_from(code)?;
        self.set_log_file(path, format)
    }
}

impl Log for Logger {
    fn log(&self, severity: Severity, message: &str) {
        let outputs = self.outputs.read().clone();
        let module = self.module.lock();
        let record = LogRecord::new(severity, module.as_str(), message);
        let line = record.to_console_line(self.config.colors_enabled());

        if let Err(err) = self.config.mirror(&record) {
            outputs.report_file_error(&record.module, &err);
        }
        outputs.write_console(&line);
        drop(module);

        outputs.after_emit(severity);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("module", &self.module())
            .field("config", &self.config)
            .finish()
    }
}
