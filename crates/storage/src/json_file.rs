use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use stockbook_ledger::{LedgerRepository, LedgerSnapshot, StorageError};

/// One JSON document on disk, replaced atomically on every save.
///
/// Writes go to a sibling `.tmp` file first and are renamed into place, so a
/// crash mid-save leaves the previous document intact — there is no window
/// where items and transactions disagree on disk.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl LedgerRepository for JsonFileRepository {
    fn load(&self) -> Result<Option<LedgerSnapshot>, StorageError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        // Malformed documents fail fast; the ledger is never silently
        // replaced by an empty one.
        let snapshot = serde_json::from_str(&text).map_err(|e| StorageError::Corrupt {
            path: self.path.display().to_string(),
            detail: e.to_string(),
        })?;
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &LedgerSnapshot) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|e| StorageError::Backend(format!("serialize ledger: {e}")))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let staging = self.staging_path();
        fs::write(&staging, json)?;
        fs::rename(&staging, &self.path)?;
        debug!(path = %self.path.display(), "ledger document written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_as_no_prior_state() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("ledger.json"));
        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("ledger.json"));

        let snapshot = LedgerSnapshot::default();
        repo.save(&snapshot).unwrap();
        assert_eq!(repo.load().unwrap(), Some(snapshot));

        // The staging file never outlives a successful save.
        assert!(!repo.staging_path().exists());
    }

    #[test]
    fn malformed_document_fails_fast_with_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(&path, "{ not json").unwrap();

        let repo = JsonFileRepository::new(&path);
        match repo.load() {
            Err(StorageError::Corrupt { path: reported, .. }) => {
                assert!(reported.ends_with("ledger.json"));
            }
            other => panic!("expected Corrupt, got {other:?}"),
        }
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("nested/state/ledger.json"));
        repo.save(&LedgerSnapshot::default()).unwrap();
        assert!(repo.load().unwrap().is_some());
    }
}
