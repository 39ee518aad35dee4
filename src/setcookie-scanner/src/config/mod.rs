//! Scanner configuration.
//!
//! Settings come from an optional TOML file; every key has a built-in default,
//! so running without a config file is the normal case.

mod error;
mod scanner;

pub use error::ConfigError;
pub use scanner::ScannerConfig;

use std::path::Path;
use tracing::info;

/// Loads the scanner config from `path`, or returns the defaults when no path
/// is given.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file exists but cannot be loaded.
pub fn load_config(path: Option<&Path>) -> Result<ScannerConfig, ConfigError> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "Loading config file");
            ScannerConfig::load(path)
        }
        None => Ok(ScannerConfig::default()),
    }
}
