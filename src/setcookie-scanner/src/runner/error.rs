//! Runner error types.

/// Errors that can occur while running a scan.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The target is not a valid URL.
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The target URL uses a scheme other than http or https.
    #[error("Unsupported URL scheme '{scheme}', expected http or https")]
    UnsupportedScheme { scheme: String },

    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// HTTP client and transport errors.
    #[error(transparent)]
    Fetch(#[from] crate::fetch::FetchError),

    /// Report output errors.
    #[error(transparent)]
    Report(#[from] crate::report::ReportError),
}
