//! The directory itself: a bulk-loaded, read-mostly map of server records.

use std::collections::HashMap;

use chrono::NaiveDate;
use parking_lot::RwLock;
use tracing::{info, warn};

use crate::record::ServerRecord;

/// Mapping from server id to its record.
///
/// Exactly one writer role (the bootstrap) calls [`load`](Self::load);
/// greeting handlers read concurrently. Before the bootstrap completes
/// the map is simply empty and every lookup takes the fallback path, so
/// early connect events race the load safely.
#[derive(Debug, Default)]
pub struct ServerDirectory {
    records: RwLock<HashMap<String, ServerRecord>>,
}

impl ServerDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-replace the mapping with `records`.
    ///
    /// Duplicate server ids keep the last record seen, with a warning.
    pub fn load(&self, records: Vec<ServerRecord>) {
        let mut map = HashMap::with_capacity(records.len());
        for record in records {
            if let Some(previous) = map.insert(record.server_id.clone(), record) {
                warn!(
                    server_id = %previous.server_id,
                    "duplicate server record, keeping the later one"
                );
            }
        }

        let count = map.len();
        let mut ids: Vec<&str> = map.keys().map(String::as_str).collect();
        ids.sort_unstable();
        info!(count, servers = ?ids, "server directory loaded");

        *self.records.write() = map;
    }

    /// Look up a record by server id. Absence is a valid state, not an
    /// error.
    pub fn lookup(&self, server_id: &str) -> Option<ServerRecord> {
        self.records.read().get(server_id).cloned()
    }

    /// The display name and whole days open for a server.
    ///
    /// Registered servers report their display name (or id when unset)
    /// and the number of whole days between foundation and `today`,
    /// clamped at zero. Unregistered servers report `(server_id, 0)`.
    /// This exact fallback is user-facing text, not an error path.
    pub fn days_since_foundation(&self, server_id: &str, today: NaiveDate) -> (String, i64) {
        match self.lookup(server_id) {
            Some(record) => {
                let days = (today - record.founded).num_days().max(0);
                (record.shown_name().to_owned(), days)
            }
            None => (server_id.to_owned(), 0),
        }
    }

    /// Number of loaded records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether any records have been loaded yet.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}
