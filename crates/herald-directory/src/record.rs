//! Server record type and validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DirectoryError, Result};

/// Metadata about one cluster member.
///
/// Records are created during directory load and never mutated afterwards.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ServerRecord {
    /// Unique server identifier, as registered with the proxy
    pub server_id: String,

    /// Human-facing display name; falls back to `server_id` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Date the server opened (ISO 8601 calendar date)
    pub founded: NaiveDate,

    /// Ordering priority within the roster
    #[serde(default)]
    pub priority: i32,
}

impl ServerRecord {
    /// Validate the record.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::InvalidRecord` if the id is empty or the
    /// display name is present but blank.
    pub fn validate(&self) -> Result<()> {
        if self.server_id.trim().is_empty() {
            return Err(DirectoryError::invalid_record(
                &self.server_id,
                "server id cannot be empty",
            ));
        }

        if let Some(name) = &self.display_name
            && name.trim().is_empty()
        {
            return Err(DirectoryError::invalid_record(
                &self.server_id,
                "display name cannot be blank when set",
            ));
        }

        Ok(())
    }

    /// The name shown to players: the display name when set, otherwise
    /// the server id.
    pub fn shown_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.server_id)
    }
}
