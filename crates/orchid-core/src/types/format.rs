//! On-disk encodings for mirrored log lines

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Encoding used when a record is mirrored to the log file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    /// `YYYY-MM-DD HH:MM:SS [SEVERITY] module: text`
    #[default]
    Text = 0,
    /// One compact JSON object per line
    Json = 1,
}

impl FileFormat {
    /// Integer code used by callers that pass formats as plain numbers
    pub fn code(&self) -> i32 {
        *self as i32
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileFormat::Text => "text",
            FileFormat::Json => "json",
        }
    }
}

impl TryFrom<i32> for FileFormat {
    type Error = ValidationError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(FileFormat::Text),
            1 => Ok(FileFormat::Json),
            other => Err(ValidationError::InvalidFormat(other)),
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
