//! Serializable logger settings (YAML)
//!
//! A settings file looks like:
//!
//! ```yaml
//! file: logs/app.log
//! format: json
//! colors: false
//! ```
//!
//! Every key is optional. Load it with [`LogSettings::load`] and install it
//! with [`Configuration::apply`](super::Configuration::apply).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{OrchidError, OrchidResult};
use crate::types::FileFormat;

fn default_colors() -> bool {
    true
}

/// File destination, encoding and color policy as plain data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSettings {
    /// Log file path; absent disables file logging
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    #[serde(default)]
    pub format: FileFormat,

    #[serde(default = "default_colors")]
    pub colors: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file: None,
            format: FileFormat::Text,
            colors: true,
        }
    }
}

impl LogSettings {
    /// Parse settings from YAML text
    pub fn from_yaml_str(yaml: &str) -> OrchidResult<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| OrchidError::Settings(format!("Failed to parse YAML: {}", e)))
    }

    /// Load settings from a YAML file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> OrchidResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| OrchidError::Settings(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_yaml_str(&content)
    }

    pub fn to_yaml_string(&self) -> OrchidResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| OrchidError::Settings(format!("Failed to serialize YAML: {}", e)))
    }

    /// Write settings to a YAML file, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> OrchidResult<()> {
        let path = path.as_ref();
        let write_err =
            |e: std::io::Error| OrchidError::Settings(format!("Failed to write {}: {}", path.display(), e));
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, self.to_yaml_string()?).map_err(write_err)
    }

    /// Export as pretty JSON
    pub fn to_json(&self) -> OrchidResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
