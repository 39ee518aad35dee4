//! The issue record.

use super::{FurtherInfo, ReferenceUrl, References, Severity};
use serde::{Deserialize, Serialize};

/// A single finding about the scanned response.
///
/// Serializes to the report format: `Summary`, `Description`, `Severity`,
/// `URLs` and `FurtherInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Issue {
    /// Short classification label.
    pub summary: String,

    /// Human-readable explanation, may quote the observed header.
    pub description: String,

    /// Severity of the finding.
    pub severity: Severity,

    /// Related links.
    #[serde(rename = "URLs")]
    pub urls: Vec<ReferenceUrl>,

    /// Documentation links.
    pub further_info: Vec<FurtherInfo>,
}

impl Issue {
    /// Creates an issue carrying the given reference links.
    pub fn new(
        summary: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
        references: &References,
    ) -> Self {
        Self {
            summary: summary.into(),
            description: description.into(),
            severity,
            urls: references.urls().to_vec(),
            further_info: references.further_info().to_vec(),
        }
    }
}
