//! Directory sources and the retry-forever bootstrap loop.
//!
//! The persistent store behind the directory is abstracted as a
//! [`DirectorySource`]; the shipped implementation reads a JSON file of
//! records. [`run_bootstrap`] owns the connection-retry policy: a fixed
//! sleep between attempts, retried indefinitely, with exactly one
//! [`ServerDirectory::load`] on the first success.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::{error, info};

use crate::directory::ServerDirectory;
use crate::error::{DirectoryError, Result};
use crate::record::ServerRecord;

/// Default sleep between failed bootstrap attempts.
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(10);

/// A persistent store that can produce the full set of server records.
#[async_trait]
pub trait DirectorySource: Send + Sync {
    /// Fetch every server record from the store.
    async fn fetch_records(&self) -> Result<Vec<ServerRecord>>;
}

/// Directory source backed by a JSON file holding an array of records.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source reading from `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The configured file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DirectorySource for JsonFileSource {
    async fn fetch_records(&self) -> Result<Vec<ServerRecord>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| DirectoryError::load_failed(&self.path, e))?;

        let records: Vec<ServerRecord> = serde_json::from_str(&raw)?;
        for record in &records {
            record.validate()?;
        }

        Ok(records)
    }
}

/// Load the directory from `source`, retrying forever until one load
/// succeeds.
///
/// Failures are logged and retried after `retry_interval`; the function
/// returns after the single successful [`ServerDirectory::load`]. Connect
/// events arriving before that see an empty directory and fall back to
/// default greeting data, so nothing here is on a request path.
pub async fn run_bootstrap<S>(source: &S, directory: &ServerDirectory, retry_interval: Duration)
where
    S: DirectorySource + ?Sized,
{
    let mut attempt: u32 = 1;
    loop {
        match source.fetch_records().await {
            Ok(records) => {
                directory.load(records);
                info!(attempt, "directory bootstrap complete");
                return;
            }
            Err(error) => {
                error!(
                    attempt,
                    %error,
                    retry_in = ?retry_interval,
                    "directory load failed, retrying"
                );
                sleep(retry_interval).await;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tempfile::NamedTempFile;

    const RECORDS_JSON: &str = r#"[
        {"server_id": "lobby", "display_name": "The Lobby", "founded": "2019-11-02", "priority": 1},
        {"server_id": "survival", "founded": "2020-03-14", "priority": 2}
    ]"#;

    fn records_file(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn reads_records_from_json_file() {
        let file = records_file(RECORDS_JSON);
        let source = JsonFileSource::new(file.path());

        let records = source.fetch_records().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].server_id, "lobby");
        assert_eq!(
            records[1].founded,
            NaiveDate::from_ymd_opt(2020, 3, 14).unwrap()
        );
    }

    #[tokio::test]
    async fn missing_file_is_a_load_error() {
        let source = JsonFileSource::new("/nonexistent/servers.json");
        let err = source.fetch_records().await.unwrap_err();
        assert!(matches!(err, DirectoryError::LoadFailed { .. }));
    }

    #[tokio::test]
    async fn invalid_json_is_rejected() {
        let file = records_file("{not json");
        let source = JsonFileSource::new(file.path());
        let err = source.fetch_records().await.unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidJson(_)));
    }

    #[tokio::test]
    async fn record_validation_failures_are_rejected() {
        let file = records_file(r#"[{"server_id": "", "founded": "2020-01-01"}]"#);
        let source = JsonFileSource::new(file.path());
        let err = source.fetch_records().await.unwrap_err();
        assert!(matches!(err, DirectoryError::InvalidRecord { .. }));
    }

    /// Source that fails a fixed number of times before succeeding.
    struct FlakySource {
        failures_left: AtomicU32,
        attempts: AtomicU32,
    }

    #[async_trait]
    impl DirectorySource for FlakySource {
        async fn fetch_records(&self) -> Result<Vec<ServerRecord>> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            if self
                .failures_left
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok()
            {
                return Err(DirectoryError::invalid_record("flaky", "not yet"));
            }
            Ok(vec![ServerRecord {
                server_id: "lobby".to_owned(),
                display_name: None,
                founded: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                priority: 0,
            }])
        }
    }

    #[tokio::test]
    async fn bootstrap_retries_until_success_and_loads_once() {
        let source = FlakySource {
            failures_left: AtomicU32::new(2),
            attempts: AtomicU32::new(0),
        };
        let directory = ServerDirectory::new();

        run_bootstrap(&source, &directory, Duration::from_millis(5)).await;

        assert_eq!(source.attempts.load(Ordering::SeqCst), 3);
        assert_eq!(directory.len(), 1);
        assert!(directory.lookup("lobby").is_some());
    }
}
