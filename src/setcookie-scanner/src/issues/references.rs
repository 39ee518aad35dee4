//! Reference links attached to every issue.

use serde::{Deserialize, Serialize};

/// MSDN page on HTTP cookies, the default further-info link.
pub const MSDN_HTTP_COOKIES_URL: &str =
    "http://msdn.microsoft.com/en-us/library/windows/desktop/aa384321%28v=vs.85%29.aspx";

/// Title shown for [`MSDN_HTTP_COOKIES_URL`].
pub const MSDN_HTTP_COOKIES_TITLE: &str = "MSDN - HTTP Cookies";

/// A URL related to the finding, with optional extra text.
///
/// The lowercase aliases let the same type be read from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceUrl {
    /// Link target. Empty when the scanner has nothing to point at.
    #[serde(rename = "URL", alias = "url", default)]
    pub url: String,

    /// Free-form text accompanying the link.
    #[serde(rename = "Extra", alias = "extra", default)]
    pub extra: String,
}

/// A documentation link explaining the finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FurtherInfo {
    /// Link target.
    #[serde(rename = "URL", alias = "url")]
    pub url: String,

    /// Human-readable link title.
    #[serde(rename = "Title", alias = "title")]
    pub title: String,
}

impl FurtherInfo {
    /// The MSDN "HTTP Cookies" reference.
    #[must_use]
    pub fn msdn_http_cookies() -> Self {
        Self {
            url: MSDN_HTTP_COOKIES_URL.to_string(),
            title: MSDN_HTTP_COOKIES_TITLE.to_string(),
        }
    }
}

/// Reference links shared by all issues of a run.
///
/// Built once at startup and handed to the analyzer; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct References {
    urls: Vec<ReferenceUrl>,
    further_info: Vec<FurtherInfo>,
}

impl References {
    /// Creates a reference set from explicit links.
    #[must_use]
    pub fn new(urls: Vec<ReferenceUrl>, further_info: Vec<FurtherInfo>) -> Self {
        Self { urls, further_info }
    }

    /// Returns the `URLs` entries.
    pub fn urls(&self) -> &[ReferenceUrl] {
        &self.urls
    }

    /// Returns the `FurtherInfo` entries.
    pub fn further_info(&self) -> &[FurtherInfo] {
        &self.further_info
    }
}

impl Default for References {
    /// One empty URL entry plus the MSDN cookie reference.
    fn default() -> Self {
        Self::new(
            vec![ReferenceUrl::default()],
            vec![FurtherInfo::msdn_http_cookies()],
        )
    }
}
