//! Report outcome types.

/// Result of writing a single issue to the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportOutcome {
    /// The issue was serialized and written.
    Written,

    /// Serialization failed; a diagnostic line was written instead.
    Failed {
        /// Serialization error message.
        error: String,
    },
}

impl ReportOutcome {
    /// Returns true if the record made it into the report.
    #[must_use]
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written)
    }
}
