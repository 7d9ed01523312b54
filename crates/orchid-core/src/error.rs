//! Error types

use std::io;

use thiserror::Error;

use crate::config::{MAX_FILE_NAME_LEN, MAX_MODULE_NAME_LEN, MAX_PATH_LEN};

/// Rejected input at the configuration boundary. Returning one of these
/// never changes shared state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("module name cannot be empty")]
    EmptyModuleName,

    #[error("module name too long: {len} characters (max {max})", max = MAX_MODULE_NAME_LEN)]
    ModuleNameTooLong { len: usize },

    #[error("file path cannot have leading or trailing whitespace")]
    PathWhitespace,

    #[error("file path cannot contain null bytes")]
    PathContainsNul,

    #[error("file path too long: {len} characters (max {max})", max = MAX_PATH_LEN)]
    PathTooLong { len: usize },

    #[error("file name too long: {len} characters (max {max})", max = MAX_FILE_NAME_LEN)]
    FileNameTooLong { len: usize },

    #[error("invalid log format: {0}")]
    InvalidFormat(i32),
}

/// Errors from logger configuration and file output
#[derive(Error, Debug)]
pub enum OrchidError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to open log file {path}: {source}")]
    FileOpen {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to close log file: {0}")]
    FileClose(#[source] io::Error),

    #[error("log file {0} is configured but its handle is closed")]
    HandleClosed(String),

    #[error("failed to write log file: {0}")]
    Write(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type OrchidResult<T> = Result<T, OrchidError>;
