//! Shared logger configuration
//!
//! - `Configuration`: the store every logger reads file/format/color policy from
//! - `LogSettings`: the same policy as plain data, loadable from YAML
//! - validation helpers applied before any state change

mod store;
mod settings;
mod validation;

pub use store::Configuration;
pub use settings::LogSettings;
pub use validation::{
    validate_file_path, validate_module_name, MAX_FILE_NAME_LEN, MAX_MODULE_NAME_LEN, MAX_PATH_LEN,
};
