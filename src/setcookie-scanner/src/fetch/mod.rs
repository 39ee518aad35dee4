//! Fetching the target's `Set-Cookie` header.
//!
//! Exactly one GET is issued per scan. There is no retry and no timeout beyond
//! the HTTP client's defaults.

mod error;

pub use error::FetchError;

use reqwest::header::{HeaderMap, SET_COOKIE};
use reqwest::Client;
use tracing::{debug, info, info_span, Instrument};
use url::Url;

/// Performs the single GET request of a scan.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Creates a fetcher sending the given `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Client`] if the HTTP client cannot be built.
    pub fn new(user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    /// Creates a fetcher around an already configured client.
    #[must_use]
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetches `url` and returns its first `Set-Cookie` value, if any.
    ///
    /// Any HTTP status counts as a response; only transport failures are errors.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Request`] if the request cannot be completed.
    pub async fn fetch_set_cookie(&self, url: &Url) -> Result<Option<String>, FetchError> {
        let span = info_span!("fetch", url = %url);

        async {
            info!("Fetching target");

            let response = self
                .client
                .get(url.clone())
                .send()
                .await
                .map_err(|source| FetchError::Request {
                    url: url.to_string(),
                    source,
                })?;

            let set_cookie = first_set_cookie(response.headers());
            debug!(
                status = %response.status(),
                set_cookie_present = set_cookie.is_some(),
                "Received response"
            );
            Ok(set_cookie)
        }
        .instrument(span)
        .await
    }
}

/// Returns the first `Set-Cookie` value in `headers`.
///
/// Later `Set-Cookie` headers are ignored. Bytes that are not valid UTF-8 are
/// replaced rather than dropping the header.
#[must_use]
pub fn first_set_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get(SET_COOKIE)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
}
