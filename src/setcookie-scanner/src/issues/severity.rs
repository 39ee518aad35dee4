//! Issue severity levels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a reported issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Informational finding, nothing to fix.
    Info,

    /// A cookie flag is missing.
    High,
}

impl Severity {
    /// Returns the severity as it appears in the report.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
