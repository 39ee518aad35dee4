//! Report error types.

use thiserror::Error;

/// Errors that can occur while writing the report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Writing to the output stream failed.
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
