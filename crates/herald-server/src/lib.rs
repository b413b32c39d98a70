//! Herald greeter service.
//!
//! Composes the greeting a player receives when connecting to one of the
//! network's interconnected servers: how long the target server has been
//! open, a random "phrase of the day" from the background-refreshed cache,
//! and a clickable roster of all known servers. The proxy delivers connect
//! events over a small HTTP surface ([`http`]) and renders the returned
//! spans however its chat system likes.
//!
//! Wiring lives in [`server`]: one background task bootstraps the server
//! directory (retrying forever against the configured store), one drives
//! the phrase cache refresh, and request handlers only ever read.

pub mod config;
pub mod error;
pub mod greeting;
pub mod http;
pub mod message;
pub mod server;

pub use config::ServerConfig;
pub use error::{ConfigError, ServerError};
pub use greeting::Greeter;
pub use message::{Message, Span};
pub use server::{AppState, Server};
