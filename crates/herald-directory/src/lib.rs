//! Server metadata directory for the Herald greeter.
//!
//! Holds one [`ServerRecord`] per cluster member (display name, foundation
//! date, priority) and answers the "days since foundation" question with
//! exact fallback behavior for servers that are not (yet) registered: an
//! unknown id produces the id itself and a day count of zero, never an
//! error. The directory is bulk-loaded once by a bootstrap collaborator
//! ([`run_bootstrap`]), which retries a [`DirectorySource`] with a fixed
//! sleep until one load succeeds.

pub mod directory;
pub mod error;
pub mod record;
pub mod source;

pub use directory::ServerDirectory;
pub use error::{DirectoryError, Result};
pub use record::ServerRecord;
pub use source::{DEFAULT_RETRY_INTERVAL, DirectorySource, JsonFileSource, run_bootstrap};
