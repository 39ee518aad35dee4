//! Set-Cookie flag analysis.
//!
//! Classifies a single `Set-Cookie` header value into one or two
//! [`Finding`]s and turns them into [`Issue`]s.

mod finding;
mod tokens;

pub use finding::{
    Finding, BOTH_FLAGS_SET_SUMMARY, MISSING_HTTP_ONLY_SUMMARY, MISSING_SECURE_SUMMARY,
    NO_SET_COOKIE_SUMMARY,
};
pub use tokens::{cookie_tokens, CookieFlags, HTTP_ONLY_FLAG, SECURE_FLAG};

use crate::issues::{Issue, References};
use tracing::debug;

/// Classifies a `Set-Cookie` value.
///
/// An absent header and a value that is empty after trimming are the same
/// case: one [`Finding::NoSetCookie`] and no further checks. Otherwise the
/// result holds a missing-`secure` finding, then a missing-`HttpOnly` finding,
/// or a single [`Finding::BothFlagsSet`] when neither is missing.
#[must_use]
pub fn classify(header: Option<&str>) -> Vec<Finding<'_>> {
    let cookie = match header {
        Some(value) if !value.trim().is_empty() => value,
        _ => return vec![Finding::NoSetCookie],
    };

    let flags = CookieFlags::from_header(cookie);
    debug!(secure = flags.secure, http_only = flags.http_only, "Checked cookie flags");

    let mut findings = Vec::with_capacity(2);
    if !flags.secure {
        findings.push(Finding::MissingSecure { cookie });
    }
    if !flags.http_only {
        findings.push(Finding::MissingHttpOnly { cookie });
    }
    if findings.is_empty() {
        findings.push(Finding::BothFlagsSet);
    }
    findings
}

/// Analyzes a `Set-Cookie` value, yielding one issue per finding.
///
/// Issues are built lazily as the iterator is consumed.
pub fn analyze<'a>(
    header: Option<&'a str>,
    references: &'a References,
) -> impl Iterator<Item = Issue> + 'a {
    classify(header)
        .into_iter()
        .map(move |finding| finding.to_issue(references))
}
