//! Runner configuration.

use super::RunnerError;
use crate::config::ScannerConfig;
use url::Url;

/// Configuration for a single scan.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// URL to fetch.
    url: Url,
    /// Scanner settings.
    scanner: ScannerConfig,
}

impl RunnerConfig {
    /// Creates a configuration for scanning `url`.
    pub fn new(url: Url, scanner: ScannerConfig) -> Self {
        Self { url, scanner }
    }

    /// Parses `target` and creates a configuration for scanning it.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::InvalidUrl`] if `target` does not parse and
    /// [`RunnerError::UnsupportedScheme`] if it is not http or https.
    pub fn from_target(target: &str, scanner: ScannerConfig) -> Result<Self, RunnerError> {
        let url = Url::parse(target).map_err(|source| RunnerError::InvalidUrl {
            url: target.to_string(),
            source,
        })?;

        match url.scheme() {
            "http" | "https" => Ok(Self::new(url, scanner)),
            scheme => Err(RunnerError::UnsupportedScheme {
                scheme: scheme.to_string(),
            }),
        }
    }

    /// Returns the URL to scan.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Returns the scanner settings.
    pub fn scanner(&self) -> &ScannerConfig {
        &self.scanner
    }
}
