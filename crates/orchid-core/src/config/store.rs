//! Shared configuration store
//!
//! One `Configuration` is the single source of truth for file destination,
//! file encoding and color policy. Loggers hold an `Arc` to it and reach the
//! log file only through [`Configuration::mirror`], so every destination has
//! exactly one handle no matter how many loggers write to it.
//!
//! All fields live behind one `RwLock`. Mirrors take the read lock for the
//! duration of their write, so replacing the handle waits for in-flight
//! writes and no writer ever sees a closed-but-not-yet-replaced handle.

use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use super::settings::LogSettings;
use super::validation::validate_file_path;
use crate::error::{OrchidError, OrchidResult};
use crate::sink::{FileSink, Sink};
use crate::types::{FileFormat, LogRecord};

/// Process-wide instance backing the global facade
static GLOBAL_CONFIGURATION: Lazy<Arc<Configuration>> = Lazy::new(Configuration::create);

#[derive(Debug)]
struct ConfigState {
    file_path: String,
    format: FileFormat,
    colors: bool,
    file: Option<Arc<FileSink>>,
}

impl Default for ConfigState {
    fn default() -> Self {
        Self {
            file_path: String::new(),
            format: FileFormat::Text,
            colors: true,
            file: None,
        }
    }
}

impl ConfigState {
    /// Close the current handle, then open `path` if non-empty. On failure
    /// file logging stays disabled.
    fn install_file(&mut self, path: &str) -> OrchidResult<()> {
        if let Some(previous) = self.file.take() {
            // close errors on the abandoned destination are ignored
            let _ = previous.close();
        }
        self.file_path.clear();

        if path.is_empty() {
            return Ok(());
        }

        let sink = FileSink::open(path).map_err(|source| OrchidError::FileOpen {
            path: path.to_string(),
            source,
        })?;
        self.file = Some(Arc::new(sink));
        self.file_path = path.to_string();
        Ok(())
    }
}

/// Shared file/format/color settings
///
/// # Example
///
/// ```no_run
/// use orchid_core::{Configuration, FileFormat};
///
/// let config = Configuration::create();
/// config.configure_file("app.log", FileFormat::Json)?;
/// assert_eq!(config.file_path(), "app.log");
/// config.shutdown()?;
/// # Ok::<(), orchid_core::OrchidError>(())
/// ```
#[derive(Debug, Default)]
pub struct Configuration {
    state: RwLock<ConfigState>,
}

impl Configuration {
    /// Create a configuration in the default state: no file, text format,
    /// colors enabled
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration ready to be shared between loggers
    pub fn create() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// The process-wide configuration used by the global facade. Built on
    /// first access.
    pub fn global() -> Arc<Self> {
        Arc::clone(&GLOBAL_CONFIGURATION)
    }

    /// Point file logging at `path`, closing any previous handle first.
    /// An empty path disables file logging.
    pub fn set_default_file(&self, path: &str) -> OrchidResult<()> {
        validate_file_path(path)?;
        self.state.write().install_file(path)
    }

    pub fn set_format(&self, format: FileFormat) {
        self.state.write().format = format;
    }

    /// Set the format from its integer code (0 = text, 1 = json)
    pub fn set_format_code(&self, code: i32) -> OrchidResult<()> {
        let format = FileFormat::try_from(code)?;
        self.set_format(format);
        Ok(())
    }

    /// Set path and format under one lock acquisition
    pub fn configure_file(&self, path: &str, format: FileFormat) -> OrchidResult<()> {
        validate_file_path(path)?;
        let mut state = self.state.write();
        state.format = format;
        state.install_file(path)
    }

    /// Install loaded settings: colors, format and file
    pub fn apply(&self, settings: &LogSettings) -> OrchidResult<()> {
        let path = settings.file.as_deref().unwrap_or("");
        validate_file_path(path)?;
        let mut state = self.state.write();
        state.colors = settings.colors;
        state.format = settings.format;
        state.install_file(path)
    }

    /// Current file handle, if one is installed
    pub fn file(&self) -> Option<Arc<FileSink>> {
        self.state.read().file.clone()
    }

    /// Current file path; empty when file logging is disabled
    pub fn file_path(&self) -> String {
        self.state.read().file_path.clone()
    }

    pub fn format(&self) -> FileFormat {
        self.state.read().format
    }

    pub fn colors_enabled(&self) -> bool {
        self.state.read().colors
    }

    pub fn set_colors_enabled(&self, enabled: bool) {
        self.state.write().colors = enabled;
    }

    /// Current settings as a serializable value
    pub fn settings(&self) -> LogSettings {
        let state = self.state.read();
        LogSettings {
            file: (!state.file_path.is_empty()).then(|| state.file_path.clone()),
            format: state.format,
            colors: state.colors,
        }
    }

    /// Write `record` to the configured file in the configured format.
    ///
    /// No file configured is a no-op. A configured file whose handle has
    /// been closed, or a failed write, is an error.
    pub fn mirror(&self, record: &LogRecord) -> OrchidResult<()> {
        let state = self.state.read();
        if state.file_path.is_empty() {
            return Ok(());
        }

        let sink = state
            .file
            .as_ref()
            .filter(|sink| sink.is_open())
            .ok_or_else(|| OrchidError::HandleClosed(state.file_path.clone()))?;

        let line = record.encode(state.format)?;
        sink.write(line.as_bytes())?;
        Ok(())
    }

    /// Close the file handle, if any, and clear the path. Safe to call
    /// repeatedly.
    pub fn close(&self) -> OrchidResult<()> {
        let mut state = self.state.write();
        state.file_path.clear();
        match state.file.take() {
            Some(sink) => sink.close().map_err(OrchidError::FileClose),
            None => Ok(()),
        }
    }

    /// End-of-life counterpart to [`Configuration::create`]
    pub fn shutdown(&self) -> OrchidResult<()> {
        self.close()
    }

    /// Close any handle and restore every field to its default
    pub fn reset(&self) {
        let mut state = self.state.write();
        if let Some(sink) = state.file.take() {
            let _ = sink.close();
        }
        *state = ConfigState::default();
    }
}
