//! Error types for the phrase listing client

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Network errors
    #[error("listing request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("listing endpoint returned HTTP {status} for {url}")]
    BadStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    // Data format errors
    #[error("listing body is not well-formed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    // Configuration errors
    #[error("invalid listing URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl Error {
    /// Create a bad-status error from a response status and URL.
    pub fn bad_status(status: reqwest::StatusCode, url: impl Into<String>) -> Self {
        Self::BadStatus {
            status,
            url: url.into(),
        }
    }

    /// Create an invalid-URL error.
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
