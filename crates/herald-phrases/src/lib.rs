//! Phrase-of-the-day cache for the Herald greeter.
//!
//! This crate owns the write path of the greeter's phrase cache: a
//! [`ListingClient`] fetches an S3-style bucket listing over HTTP and
//! extracts phrase strings from the object keys, and a [`PhraseCache`]
//! holds the extracted collection as an atomically replaceable snapshot
//! that greeting handlers read concurrently.
//!
//! The cache is refreshed by a single background task spawned with
//! [`PhraseCache::spawn_refresh_task`]; readers calling
//! [`PhraseCache::random_phrase`] never block on an in-flight fetch and
//! never observe a partially replaced collection.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use herald_phrases::{ListingClient, PhraseCache};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ListingClient::new("https://files.example.net/static?prefix=pages/gifs/")?;
//! let cache = Arc::new(PhraseCache::new(client));
//!
//! // First refresh fires immediately, then every five minutes.
//! let _task = cache.spawn_refresh_task(Duration::from_secs(300));
//!
//! // Read path: always fast, empty string until the first refresh lands.
//! let phrase = cache.random_phrase();
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod client;
pub mod error;
pub mod listing;

pub use cache::{DEFAULT_REFRESH_INTERVAL, PhraseCache};
pub use client::{DEFAULT_FETCH_TIMEOUT, DEFAULT_KEY_PREFIX, ListingClient};
pub use error::{Error, Result};
