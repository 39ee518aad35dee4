//! Scanner configuration loading.

use crate::config::ConfigError;
use crate::issues::{FurtherInfo, ReferenceUrl, References};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Scanner settings, read from an optional `config.toml`.
///
/// ```toml
/// user-agent = "my-scanner/1.0"
///
/// [[further-info]]
/// url = "https://developer.mozilla.org/docs/Web/HTTP/Headers/Set-Cookie"
/// title = "MDN - Set-Cookie"
///
/// [[reference-urls]]
/// url = ""
/// extra = ""
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ScannerConfig {
    /// `User-Agent` sent with the request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// `FurtherInfo` links attached to every issue.
    #[serde(default = "default_further_info")]
    pub further_info: Vec<FurtherInfo>,

    /// `URLs` entries attached to every issue.
    #[serde(default = "default_reference_urls")]
    pub reference_urls: Vec<ReferenceUrl>,
}

pub(crate) fn default_user_agent() -> String {
    concat!("setcookie-scanner/", env!("CARGO_PKG_VERSION")).to_string()
}

pub(crate) fn default_further_info() -> Vec<FurtherInfo> {
    vec![FurtherInfo::msdn_http_cookies()]
}

pub(crate) fn default_reference_urls() -> Vec<ReferenceUrl> {
    vec![ReferenceUrl::default()]
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            further_info: default_further_info(),
            reference_urls: default_reference_urls(),
        }
    }
}

impl ScannerConfig {
    /// Loads and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, is not valid TOML,
    /// or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading scanner config");

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::Toml {
            path: path.display().to_string(),
            source: e,
        })?;

        config.validate(path)?;
        Ok(config)
    }

    /// Validates the loaded settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] on a blank `user-agent`, an
    /// empty `further-info` list, or a `further-info` entry without a URL.
    pub fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let fail = |message: &str| ConfigError::Validation {
            path: path.display().to_string(),
            message: message.to_string(),
        };

        if self.user_agent.trim().is_empty() {
            return Err(fail("user-agent cannot be empty"));
        }

        if self.further_info.is_empty() {
            return Err(fail("further-info must contain at least one entry"));
        }

        if self.further_info.iter().any(|info| info.url.trim().is_empty()) {
            return Err(fail("further-info entries must have a url"));
        }

        Ok(())
    }

    /// Builds the reference links shared by every issue of a run.
    #[must_use]
    pub fn references(&self) -> References {
        References::new(self.reference_urls.clone(), self.further_info.clone())
    }
}
