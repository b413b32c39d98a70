//! Server state management and orchestration.
//!
//! [`AppState`] is what request handlers see: shared handles to the
//! directory and phrase cache plus the greeter built over them. [`Server`]
//! owns the wiring: it spawns the directory bootstrap task and the phrase
//! refresh task, then serves the HTTP surface. Neither background task is
//! ever on a request path — handlers only read.

use std::sync::Arc;
use std::time::SystemTime;

use herald_directory::{JsonFileSource, ServerDirectory, run_bootstrap};
use herald_phrases::{ListingClient, PhraseCache};

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::greeting::Greeter;
use crate::http;

/// Shared application state for request handlers.
#[derive(Debug)]
pub struct AppState {
    directory: Arc<ServerDirectory>,
    phrases: Arc<PhraseCache>,
    greeter: Greeter,
    started_at: SystemTime,
}

impl AppState {
    /// Create application state over shared component handles.
    pub fn new(
        directory: Arc<ServerDirectory>,
        phrases: Arc<PhraseCache>,
        network_name: impl Into<String>,
    ) -> Self {
        let greeter = Greeter::new(Arc::clone(&directory), Arc::clone(&phrases), network_name);
        Self {
            directory,
            phrases,
            greeter,
            started_at: SystemTime::now(),
        }
    }

    /// The greeting composer.
    pub const fn greeter(&self) -> &Greeter {
        &self.greeter
    }

    /// Shared handle to the server directory.
    pub const fn directory(&self) -> &Arc<ServerDirectory> {
        &self.directory
    }

    /// Shared handle to the phrase cache.
    pub const fn phrases(&self) -> &Arc<PhraseCache> {
        &self.phrases
    }

    /// Seconds since this state was created.
    pub fn uptime_seconds(&self) -> u64 {
        SystemTime::now()
            .duration_since(self.started_at)
            .unwrap_or_default()
            .as_secs()
    }
}

/// Server orchestration.
pub struct Server {
    state: Arc<AppState>,
    config: ServerConfig,
}

impl Server {
    /// Create a server from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns `ServerError` when the configuration is inconsistent or
    /// the listing client cannot be constructed.
    pub fn new(config: ServerConfig) -> Result<Self, ServerError> {
        config.validate()?;

        let listing = ListingClient::with_timeout(&config.listing_url, config.fetch_timeout())?
            .with_key_prefix(&config.listing_prefix);
        let phrases = Arc::new(PhraseCache::new(listing));
        let directory = Arc::new(ServerDirectory::new());

        let state = Arc::new(AppState::new(directory, phrases, &config.network_name));

        tracing::info!(
            listing_url = %config.listing_url,
            servers = %config.servers.display(),
            "greeter initialized"
        );

        Ok(Self { state, config })
    }

    /// Shared application state (for embedding or tests).
    pub const fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Run the server until interrupted or failed.
    ///
    /// Spawns the directory bootstrap (retry forever, load once) and the
    /// phrase refresh task (first refresh immediate, then periodic), then
    /// serves the HTTP surface.
    pub async fn run(self) -> Result<(), ServerError> {
        let source = JsonFileSource::new(&self.config.servers);
        let directory = Arc::clone(self.state.directory());
        let retry_interval = self.config.bootstrap_retry();
        tokio::spawn(async move {
            run_bootstrap(&source, &directory, retry_interval).await;
        });

        let refresh_task = self
            .state
            .phrases()
            .spawn_refresh_task(self.config.refresh_interval());

        let result = http::start_server(self.config.http_bind, Arc::clone(&self.state)).await;
        refresh_task.abort();
        result
    }
}
