//! Cookie flag findings and their issue text.

use crate::issues::{Issue, References, Severity};

/// Summary for a response without a `Set-Cookie` header.
pub const NO_SET_COOKIE_SUMMARY: &str = "Site has no Set-Cookie header";

/// Summary for a cookie missing the `secure` flag.
pub const MISSING_SECURE_SUMMARY: &str = "secure flag is not set in the Set-Cookie header";

/// Summary for a cookie missing the `HttpOnly` flag.
pub const MISSING_HTTP_ONLY_SUMMARY: &str = "HttpOnly flag is not set in the Set-Cookie header";

/// Summary for a cookie carrying both flags.
pub const BOTH_FLAGS_SET_SUMMARY: &str = "Site has both HttpOnly and secure flags set properly";

const NO_SET_COOKIE_DESCRIPTION: &str = "The Set-Cookie header is sent by the server in response to an HTTP request, which is used to create a cookie on the user's system.";

const MISSING_SECURE_DESCRIPTION: &str = "If the cookies containing user sensitive information, consider adding the secure flag to the Set-Cookie header. The final cookie setting may look like this:";

const MISSING_HTTP_ONLY_DESCRIPTION: &str = "If the HttpOnly flag (optional) is included in the HTTP response header, the cookie cannot be accessed through client side script (again if the browser supports this flag). As a result, even if a cross-site scripting (XSS) flaw exists, and a user accidentally accesses a link that exploits this flaw, the browser (primarily Internet Explorer) will not reveal the cookie to a third party. The final cookie setting may look like this:";

const BOTH_FLAGS_SET_DESCRIPTION: &str = "Cookies can only be transferred over a secured channel and cookies is not accessible through client side script.";

/// Outcome of checking one `Set-Cookie` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finding<'a> {
    /// The response carried no (or an empty) `Set-Cookie` header.
    NoSetCookie,

    /// The `secure` token is missing from `cookie`.
    MissingSecure {
        /// Observed header value.
        cookie: &'a str,
    },

    /// The `HttpOnly` token is missing from `cookie`.
    MissingHttpOnly {
        /// Observed header value.
        cookie: &'a str,
    },

    /// Both flags are present.
    BothFlagsSet,
}

impl Finding<'_> {
    /// Returns the issue summary for this finding.
    #[must_use]
    pub fn summary(&self) -> &'static str {
        match self {
            Self::NoSetCookie => NO_SET_COOKIE_SUMMARY,
            Self::MissingSecure { .. } => MISSING_SECURE_SUMMARY,
            Self::MissingHttpOnly { .. } => MISSING_HTTP_ONLY_SUMMARY,
            Self::BothFlagsSet => BOTH_FLAGS_SET_SUMMARY,
        }
    }

    /// Returns the issue severity for this finding.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::NoSetCookie | Self::BothFlagsSet => Severity::Info,
            Self::MissingSecure { .. } | Self::MissingHttpOnly { .. } => Severity::High,
        }
    }

    /// Returns the issue description, including a corrected header where one applies.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::NoSetCookie => NO_SET_COOKIE_DESCRIPTION.to_string(),
            Self::MissingSecure { cookie } => {
                format!("{MISSING_SECURE_DESCRIPTION} Set-Cookie: {cookie}; secure")
            }
            Self::MissingHttpOnly { cookie } => {
                format!("{MISSING_HTTP_ONLY_DESCRIPTION} Set-Cookie: {cookie}; HttpOnly")
            }
            Self::BothFlagsSet => BOTH_FLAGS_SET_DESCRIPTION.to_string(),
        }
    }

    /// Builds the issue record for this finding.
    #[must_use]
    pub fn to_issue(&self, references: &References) -> Issue {
        Issue::new(self.summary(), self.description(), self.severity(), references)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_secure_suggests_corrected_header() {
        let finding = Finding::MissingSecure {
            cookie: "id=1; HttpOnly",
        };

        assert!(finding
            .description()
            .ends_with("may look like this: Set-Cookie: id=1; HttpOnly; secure"));
        assert_eq!(finding.severity(), Severity::High);
    }

    #[test]
    fn missing_http_only_suggests_corrected_header() {
        let finding = Finding::MissingHttpOnly {
            cookie: "id=1; secure",
        };

        assert!(finding
            .description()
            .ends_with("may look like this: Set-Cookie: id=1; secure; HttpOnly"));
        assert_eq!(finding.summary(), MISSING_HTTP_ONLY_SUMMARY);
    }

    #[test]
    fn informational_findings() {
        assert_eq!(Finding::NoSetCookie.severity(), Severity::Info);
        assert_eq!(Finding::BothFlagsSet.severity(), Severity::Info);
        assert_eq!(Finding::NoSetCookie.description(), NO_SET_COOKIE_DESCRIPTION);
    }

    #[test]
    fn to_issue_carries_finding_fields() {
        let references = References::default();
        let issue = Finding::BothFlagsSet.to_issue(&references);

        assert_eq!(issue.summary, BOTH_FLAGS_SET_SUMMARY);
        assert_eq!(issue.description, BOTH_FLAGS_SET_DESCRIPTION);
        assert_eq!(issue.severity, Severity::Info);
        assert_eq!(issue.further_info, references.further_info());
    }
}
