//! Issue records emitted by the scanner.
//!
//! An [`Issue`] is a self-contained finding: a summary, a description, a
//! [`Severity`] and the reference links shared by every finding of a run
//! ([`References`]).

mod issue;
mod references;
mod severity;

pub use issue::Issue;
pub use references::{
    FurtherInfo, ReferenceUrl, References, MSDN_HTTP_COOKIES_TITLE, MSDN_HTTP_COOKIES_URL,
};
pub use severity::Severity;
