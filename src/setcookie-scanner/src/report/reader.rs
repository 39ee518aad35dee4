//! Report parsing.

use crate::issues::Issue;
use tracing::info;

/// Parses a line-delimited report into issues.
///
/// Blank lines are ignored. Lines that do not parse as an [`Issue`] are logged
/// and skipped.
#[must_use]
pub fn read_issues(report: &str) -> Vec<Issue> {
    report
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| match serde_json::from_str::<Issue>(line) {
            Ok(issue) => Some(issue),
            Err(e) => {
                info!(line, error = %e, "Skipping non-issue report line");
                None
            }
        })
        .collect()
}
