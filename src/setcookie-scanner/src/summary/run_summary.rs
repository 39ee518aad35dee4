//! Run summary types.

use super::result::ReportOutcome;
use crate::issues::{Issue, Severity};

/// Summary of a complete scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Whether the response carried a non-empty `Set-Cookie` header.
    pub set_cookie_present: bool,

    /// Number of issues written to the report.
    pub issues_reported: usize,

    /// Number of `High` issues written.
    pub high_issues: usize,

    /// Number of `Info` issues written.
    pub info_issues: usize,

    /// Number of issues replaced by a serialization diagnostic.
    pub serialization_failures: usize,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(set_cookie_present: bool) -> Self {
        Self {
            set_cookie_present,
            ..Default::default()
        }
    }

    /// Updates the summary with the outcome of reporting an issue.
    pub fn record_result(&mut self, issue: &Issue, outcome: &ReportOutcome) {
        match outcome {
            ReportOutcome::Written => {
                self.issues_reported += 1;
                match issue.severity {
                    Severity::High => self.high_issues += 1,
                    Severity::Info => self.info_issues += 1,
                }
            }
            ReportOutcome::Failed { .. } => self.serialization_failures += 1,
        }
    }

    /// Returns true if any `High` issue was reported.
    #[must_use]
    pub fn has_findings(&self) -> bool {
        self.high_issues > 0
    }

    /// Returns true if some issue could not be serialized.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.serialization_failures > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issues::References;

    #[test]
    fn can_record_result() {
        let references = References::default();
        let mut summary = RunSummary::new(true);

        summary.record_result(
            &Issue::new("a", "b", Severity::High, &references),
            &ReportOutcome::Written,
        );
        summary.record_result(
            &Issue::new("c", "d", Severity::Info, &references),
            &ReportOutcome::Written,
        );
        summary.record_result(
            &Issue::new("e", "f", Severity::High, &references),
            &ReportOutcome::Failed {
                error: "boom".to_string(),
            },
        );

        assert_eq!(summary.issues_reported, 2);
        assert_eq!(summary.high_issues, 1);
        assert_eq!(summary.info_issues, 1);
        assert_eq!(summary.serialization_failures, 1);
        assert!(summary.has_findings());
        assert!(summary.has_failures());
    }

    #[test]
    fn empty_summary_has_no_findings() {
        let summary = RunSummary::new(false);
        assert!(!summary.has_findings());
        assert!(!summary.has_failures());
        assert!(!summary.set_cookie_present);
    }
}
