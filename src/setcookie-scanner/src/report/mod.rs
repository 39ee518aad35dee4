//! Line-delimited JSON reporting.
//!
//! [`Reporter`] writes one JSON object per issue, newline-terminated.
//! [`read_issues`] parses such a report back, skipping lines that are not
//! issue records (for example serialization diagnostics).

mod error;
mod reader;
mod reporter;

pub use error::ReportError;
pub use reader::read_issues;
pub use reporter::Reporter;
