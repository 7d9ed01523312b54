//! Logger that owns its own file
//!
//! Unlike [`Logger`](super::Logger), a `PrivateFileLogger` does not share a
//! destination with anyone: it holds its own handle and format, and must be
//! closed explicitly.

use std::fmt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use super::log::Log;
use super::outputs::Outputs;
use super::terminator::SharedTerminator;
use crate::config::{validate_file_path, validate_module_name};
use crate::error::{OrchidError, OrchidResult};
use crate::sink::{FileSink, SharedSink, Sink};
use crate::types::{FileFormat, LogRecord, Severity};

struct PrivateState {
    module: String,
    format: FileFormat,
    file: Option<FileSink>,
}

impl PrivateState {
    fn mirror(&self, record: &LogRecord) -> OrchidResult<()> {
        let Some(file) = &self.file else {
            return Ok(());
        };
        if !file.is_open() {
            return Err(OrchidError::HandleClosed(file.path().display().to_string()));
        }
        let line = record.encode(self.format)?;
        file.write(line.as_bytes())?;
        Ok(())
    }
}

/// Logger with an independently owned log file
///
/// # Example
///
/// ```no_run
/// use orchid_core::{FileFormat, Log, PrivateFileLogger};
///
/// let logger = PrivateFileLogger::open("audit", "audit.json", FileFormat::Json)?;
/// logger.info("user created");
/// logger.close()?;
/// # Ok::<(), orchid_core::OrchidError>(())
/// ```
pub struct PrivateFileLogger {
    state: Mutex<PrivateState>,
    colors: AtomicBool,
    outputs: Outputs,
}

impl PrivateFileLogger {
    /// Create a logger for `module` writing to `path`. An empty path gives a
    /// console-only logger.
    pub fn open(module: &str, path: &str, format: FileFormat) -> OrchidResult<Self> {
        let module = validate_module_name(module)?;
        validate_file_path(path)?;
        let logger = Self {
            state: Mutex::new(PrivateState {
                module,
                format,
                file: None,
            }),
            colors: AtomicBool::new(true),
            outputs: Outputs::default(),
        };
        logger.state.lock().file = open_file(path)?;
        Ok(logger)
    }

    pub fn with_console(mut self, console: SharedSink) -> Self {
        self.outputs.console = console;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: SharedSink) -> Self {
        self.outputs.diagnostics = diagnostics;
        self
    }

    pub fn with_terminator(mut self, terminator: SharedTerminator) -> Self {
        self.outputs.terminator = terminator;
        self
    }

    /// Re-initialize name, file and format. The previous file is closed
    /// first. Invalid input changes nothing; if the new file cannot be
    /// opened the logger keeps the new name and format but has no file.
    pub fn init(&self, module: &str, path: &str, format: FileFormat) -> OrchidResult<()> {
        let module = validate_module_name(module)?;
        validate_file_path(path)?;

        let mut state = self.state.lock();
        if let Some(previous) = state.file.take() {
            let _ = previous.close();
        }
        state.module = module;
        state.format = format;
        state.file = open_file(path)?;
        Ok(())
    }

    pub fn module(&self) -> String {
        self.state.lock().module.clone()
    }

    pub fn format(&self) -> FileFormat {
        self.state.lock().format
    }

    /// Path of the open file, if any
    pub fn file_path(&self) -> Option<PathBuf> {
        self.state
            .lock()
            .file
            .as_ref()
            .map(|file| file.path().to_path_buf())
    }

    pub fn is_open(&self) -> bool {
        self.state.lock().file.as_ref().is_some_and(FileSink::is_open)
    }

    pub fn set_colors_enabled(&self, enabled: bool) {
        self.colors.store(enabled, Ordering::Relaxed);
    }

    /// Close the file. Calling this again is a no-op.
    pub fn close(&self) -> OrchidResult<()> {
        match self.state.lock().file.take() {
            Some(file) => file.close().map_err(OrchidError::FileClose),
            None => Ok(()),
        }
    }
}

fn open_file(path: &str) -> OrchidResult<Option<FileSink>> {
    if path.is_empty() {
        return Ok(None);
    }
    FileSink::open(path)
        .map(Some)
        .map_err(|source| OrchidError::FileOpen {
            path: path.to_string(),
            source,
        })
}

impl Log for PrivateFileLogger {
    fn log(&self, severity: Severity, message: &str) {
        let state = self.state.lock();
        let record = LogRecord::new(severity, state.module.as_str(), message);
        let line = record.to_console_line(self.colors.load(Ordering::Relaxed));

        if let Err(err) = state.mirror(&record) {
            self.outputs.report_file_error(&record.module, &err);
        }
        self.outputs.write_console(&line);
        drop(state);

        self.outputs.after_emit(severity);
    }
}

impl fmt::Debug for PrivateFileLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateFileLogger")
            .field("module", &self.module())
            .field("format", &self.format())
            .field("file", &self.file_path())
            .finish()
    }
}
