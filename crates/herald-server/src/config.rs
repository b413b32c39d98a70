//! Service configuration.
//!
//! Configuration comes from CLI arguments with environment-variable
//! fallbacks (`HERALD_*`). The service owns only its own knobs: the
//! listing endpoint and refresh cadence for the phrase cache, the path of
//! the server-record store, and the HTTP bind address the proxy talks to.
//!
//! # Example
//!
//! ```no_run
//! use herald_server::ServerConfig;
//!
//! let config = ServerConfig::from_args();
//! config.validate().expect("invalid configuration");
//! println!("greeter will listen on {}", config.http_bind);
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use url::Url;

use crate::error::ConfigError;

/// Greeter service configuration loaded from CLI args and environment
/// variables.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "herald",
    about = "Greeter service for a multi-server game network",
    version
)]
pub struct ServerConfig {
    /// HTTP bind address for the connect-event surface
    #[arg(long, env = "HERALD_HTTP_BIND", default_value = "0.0.0.0:8080")]
    pub http_bind: SocketAddr,

    /// URL of the remote phrase listing endpoint
    #[arg(long, env = "HERALD_LISTING_URL")]
    pub listing_url: String,

    /// Leading key prefix stripped from listing entries
    #[arg(long, env = "HERALD_LISTING_PREFIX", default_value = "pages/gifs/")]
    pub listing_prefix: String,

    /// Seconds between phrase cache refreshes
    #[arg(long, env = "HERALD_REFRESH_INTERVAL_SECS", default_value_t = 300)]
    pub refresh_interval_secs: u64,

    /// Request timeout for listing fetches, in seconds
    #[arg(long, env = "HERALD_FETCH_TIMEOUT_SECS", default_value_t = 30)]
    pub fetch_timeout_secs: u64,

    /// Path to the JSON file holding server records
    #[arg(long, env = "HERALD_SERVERS", default_value = "./servers.json")]
    pub servers: PathBuf,

    /// Seconds between directory bootstrap retries
    #[arg(long, env = "HERALD_BOOTSTRAP_RETRY_SECS", default_value_t = 10)]
    pub bootstrap_retry_secs: u64,

    /// Network name used in the greeting salutation
    #[arg(long, env = "HERALD_NETWORK_NAME", default_value = "the network")]
    pub network_name: String,
}

impl ServerConfig {
    /// Parse configuration from command-line arguments.
    #[must_use]
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Validate configuration consistency.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the listing URL does not parse or an
    /// interval is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Url::parse(&self.listing_url).map_err(|e| ConfigError::InvalidListingUrl {
            url: self.listing_url.clone(),
            reason: e.to_string(),
        })?;

        if self.refresh_interval_secs == 0 {
            return Err(ConfigError::ZeroInterval {
                name: "refresh-interval-secs",
            });
        }
        if self.fetch_timeout_secs == 0 {
            return Err(ConfigError::ZeroInterval {
                name: "fetch-timeout-secs",
            });
        }
        if self.bootstrap_retry_secs == 0 {
            return Err(ConfigError::ZeroInterval {
                name: "bootstrap-retry-secs",
            });
        }

        Ok(())
    }

    /// Refresh period as a [`Duration`].
    #[must_use]
    pub const fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    /// Fetch timeout as a [`Duration`].
    #[must_use]
    pub const fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Bootstrap retry sleep as a [`Duration`].
    #[must_use]
    pub const fn bootstrap_retry(&self) -> Duration {
        Duration::from_secs(self.bootstrap_retry_secs)
    }
}
