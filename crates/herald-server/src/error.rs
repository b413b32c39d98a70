//! Error types for the greeter service.

use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid listing endpoint URL
    #[error("invalid listing URL '{url}': {reason}")]
    InvalidListingUrl {
        /// The invalid URL string
        url: String,
        /// Reason for invalidity
        reason: String,
    },

    /// An interval that must be positive was zero
    #[error("{name} must be greater than zero")]
    ZeroInterval {
        /// Name of the offending setting
        name: &'static str,
    },
}

/// Server runtime errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Invalid configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Listing client could not be constructed
    #[error("failed to build listing client: {0}")]
    ListingClient(#[from] herald_phrases::Error),

    /// Failed to bind the HTTP listener
    #[error("failed to bind HTTP server to {addr}: {source}")]
    BindFailed {
        /// Address that failed to bind
        addr: std::net::SocketAddr,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// HTTP server terminated with an error
    #[error("HTTP server error: {0}")]
    Serve(#[source] std::io::Error),
}
