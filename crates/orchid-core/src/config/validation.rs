//! Input validation for module names and log file paths
//!
//! Everything here runs before any shared state is touched or any
//! file-system call is made.

use std::path::Path;

use crate::error::ValidationError;

/// Maximum length of a module name, after trimming
pub const MAX_MODULE_NAME_LEN: usize = 50;

/// Maximum length of a log file path
pub const MAX_PATH_LEN: usize = 260;

/// Maximum length of the final component of a log file path
pub const MAX_FILE_NAME_LEN: usize = 255;

/// Trim a module name and check its length. Returns the trimmed name.
pub fn validate_module_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyModuleName);
    }
    let len = trimmed.chars().count();
    if len > MAX_MODULE_NAME_LEN {
        return Err(ValidationError::ModuleNameTooLong { len });
    }
    Ok(trimmed.to_string())
}

/// Check a log file path. The empty path is valid and means "no file".
pub fn validate_file_path(path: &str) -> Result<(), ValidationError> {
    if path.is_empty() {
        return Ok(());
    }
    if path.trim() != path {
        return Err(ValidationError::PathWhitespace);
    }
    if path.contains('\0') {
        return Err(ValidationError::PathContainsNul);
    }
    let len = path.chars().count();
    if len > MAX_PATH_LEN {
        return Err(ValidationError::PathTooLong { len });
    }
    if let Some(name) = Path::new(path).file_name() {
        let len = name.to_string_lossy().chars().count();
        if len > MAX_FILE_NAME_LEN {
            return Err(ValidationError::FileNameTooLong { len });
        }
    }
    Ok(())
}
