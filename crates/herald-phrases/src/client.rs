//! HTTP client for the remote phrase listing endpoint.

use std::time::Duration;

use reqwest::{Client, Url};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::listing;

/// Default request timeout for listing fetches.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Default leading prefix stripped from object keys.
pub const DEFAULT_KEY_PREFIX: &str = "pages/gifs/";

/// HTTP client for the phrase listing endpoint.
///
/// Performs exactly one GET per [`fetch`](Self::fetch) call; retry cadence
/// belongs to the refresh scheduler, not this client.
#[derive(Debug, Clone)]
pub struct ListingClient {
    client: Client,
    url: Url,
    key_prefix: String,
}

impl ListingClient {
    /// Create a client for the given listing URL with the default timeout.
    pub fn new(url: impl AsRef<str>) -> Result<Self> {
        Self::with_timeout(url, DEFAULT_FETCH_TIMEOUT)
    }

    /// Create a client with a custom request timeout.
    ///
    /// The timeout bounds the whole fetch, so a listing endpoint that
    /// never responds turns into a fetch error instead of a wedged
    /// refresh task.
    pub fn with_timeout(url: impl AsRef<str>, timeout: Duration) -> Result<Self> {
        let url = Url::parse(url.as_ref())
            .map_err(|e| Error::invalid_url(url.as_ref(), e.to_string()))?;
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url,
            key_prefix: DEFAULT_KEY_PREFIX.to_owned(),
        })
    }

    /// Set the leading prefix stripped from object keys.
    #[must_use]
    pub fn with_key_prefix(mut self, key_prefix: impl Into<String>) -> Self {
        self.key_prefix = key_prefix.into();
        self
    }

    /// The configured listing URL.
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Fetch the listing and extract the phrase collection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on connection or timeout failure,
    /// [`Error::BadStatus`] on a non-success response, and [`Error::Xml`]
    /// when the body cannot be parsed as a listing document at all.
    pub async fn fetch(&self) -> Result<Vec<String>> {
        debug!(url = %self.url, "fetching phrase listing");

        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::bad_status(status, self.url.as_str()));
        }

        let body = response.text().await?;
        let phrases = listing::extract_phrases(&body, &self.key_prefix)?;

        trace!(count = phrases.len(), "extracted phrases from listing");
        Ok(phrases)
    }
}
