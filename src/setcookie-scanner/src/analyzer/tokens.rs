//! Set-Cookie attribute tokenization.

use std::collections::HashSet;

/// Attribute marking a cookie as HTTPS-only.
pub const SECURE_FLAG: &str = "secure";

/// Attribute hiding a cookie from client-side script.
pub const HTTP_ONLY_FLAG: &str = "HttpOnly";

/// Splits a `Set-Cookie` value into its `;`-separated tokens.
///
/// Whitespace around each token is dropped. Tokens are kept verbatim otherwise,
/// so flag lookups are case-sensitive.
#[must_use]
pub fn cookie_tokens(header: &str) -> HashSet<&str> {
    header.split(';').map(str::trim).collect()
}

/// Flags found among the tokens of a `Set-Cookie` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookieFlags {
    /// `secure` is present.
    pub secure: bool,

    /// `HttpOnly` is present.
    pub http_only: bool,
}

impl CookieFlags {
    /// Checks a `Set-Cookie` value for the `secure` and `HttpOnly` tokens.
    #[must_use]
    pub fn from_header(header: &str) -> Self {
        let tokens = cookie_tokens(header);
        Self {
            secure: tokens.contains(SECURE_FLAG),
            http_only: tokens.contains(HTTP_ONLY_FLAG),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims_tokens() {
        let tokens = cookie_tokens("sessionid=abc123 ;  Path=/;secure\t; HttpOnly");

        assert_eq!(tokens.len(), 4);
        assert!(tokens.contains("sessionid=abc123"));
        assert!(tokens.contains("Path=/"));
        assert!(tokens.contains("secure"));
        assert!(tokens.contains("HttpOnly"));
    }

    #[test]
    fn single_token_without_delimiter() {
        let tokens = cookie_tokens("sessionid=abc123");
        assert_eq!(tokens, HashSet::from(["sessionid=abc123"]));
    }

    #[test]
    fn flag_match_is_case_sensitive() {
        let flags = CookieFlags::from_header("id=1; Secure; httponly");
        assert!(!flags.secure);
        assert!(!flags.http_only);
    }

    #[test]
    fn flag_must_be_a_whole_token() {
        let flags = CookieFlags::from_header("secure=1; note=HttpOnly");
        assert!(!flags.secure);
        assert!(!flags.http_only);
    }

    #[test]
    fn detects_both_flags_in_any_order() {
        let flags = CookieFlags::from_header("id=1; HttpOnly; Path=/; secure");
        assert!(flags.secure);
        assert!(flags.http_only);
    }
}
