//! Atomically replaced phrase snapshot with a background refresh task.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use rand::Rng;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, warn};

use crate::client::ListingClient;

/// Default period between listing refreshes.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Phrase-of-the-day cache.
///
/// The collection lives behind an `RwLock<Arc<[String]>>`: a refresh
/// builds the new collection off to the side and swaps the pointer under
/// a brief write lock, so readers see either the whole old snapshot or
/// the whole new one, never a mix. A failed refresh leaves the previous
/// snapshot in place.
pub struct PhraseCache {
    client: ListingClient,
    phrases: RwLock<Arc<[String]>>,
}

impl PhraseCache {
    /// Create an empty cache that refreshes through `client`.
    ///
    /// Until the first successful refresh, [`random_phrase`](Self::random_phrase)
    /// returns the empty string.
    pub fn new(client: ListingClient) -> Self {
        Self::with_phrases(client, Vec::new())
    }

    /// Create a cache preloaded with `phrases`.
    ///
    /// Used by tests and offline tooling; the service itself starts empty
    /// and lets the refresh task populate the cache.
    pub fn with_phrases(client: ListingClient, phrases: Vec<String>) -> Self {
        Self {
            client,
            phrases: RwLock::new(phrases.into()),
        }
    }

    /// Fetch the listing and replace the snapshot.
    ///
    /// Never returns an error: a failed fetch is logged and the previous
    /// snapshot stays current, so readers only ever degrade to stale (or
    /// initially empty) phrases.
    pub async fn refresh(&self) {
        match self.client.fetch().await {
            Ok(phrases) => {
                if phrases.is_empty() {
                    warn!(url = %self.client.url(), "listing yielded no phrases");
                }
                let count = phrases.len();
                *self.phrases.write() = phrases.into();
                debug!(count, "phrase cache refreshed");
            }
            Err(error) => {
                warn!(
                    url = %self.client.url(),
                    %error,
                    "phrase refresh failed, keeping previous collection"
                );
            }
        }
    }

    /// A uniformly chosen phrase from the current snapshot, or the empty
    /// string when the snapshot is empty.
    pub fn random_phrase(&self) -> String {
        let phrases = Arc::clone(&self.phrases.read());
        if phrases.is_empty() {
            return String::new();
        }
        let index = rand::rng().random_range(0..phrases.len());
        phrases[index].clone()
    }

    /// Number of phrases in the current snapshot.
    pub fn len(&self) -> usize {
        self.phrases.read().len()
    }

    /// Whether the current snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.phrases.read().is_empty()
    }

    /// Spawn the background refresh task.
    ///
    /// The first refresh fires immediately, then one per `period`. A
    /// single task drives all refreshes, so at most one fetch is in
    /// flight at a time; when a fetch outlasts the period the missed
    /// ticks are skipped rather than queued.
    pub fn spawn_refresh_task(self: &Arc<Self>, period: Duration) -> JoinHandle<()> {
        let cache = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                cache.refresh().await;
            }
        })
    }
}

impl std::fmt::Debug for PhraseCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhraseCache")
            .field("url", &self.client.url())
            .field("len", &self.len())
            .finish()
    }
}
