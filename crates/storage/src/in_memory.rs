use std::sync::RwLock;

use stockbook_ledger::{LedgerRepository, LedgerSnapshot, StorageError};

/// In-memory repository.
///
/// Intended for tests/dev; nothing survives the process.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    snapshot: RwLock<Option<LedgerSnapshot>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed the repository, as if a prior process had saved `snapshot`.
    pub fn seeded(snapshot: LedgerSnapshot) -> Self {
        Self {
            snapshot: RwLock::new(Some(snapshot)),
        }
    }
}

impl LedgerRepository for InMemoryRepository {
    fn load(&self) -> Result<Option<LedgerSnapshot>, StorageError> {
        let guard = self
            .snapshot
            .read()
            .map_err(|_| StorageError::Backend("lock poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn save(&self, snapshot: &LedgerSnapshot) -> Result<(), StorageError> {
        let mut guard = self
            .snapshot
            .write()
            .map_err(|_| StorageError::Backend("lock poisoned".to_string()))?;
        *guard = Some(snapshot.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_repository_has_no_state() {
        let repo = InMemoryRepository::new();
        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let repo = InMemoryRepository::new();
        let snapshot = LedgerSnapshot::default();
        repo.save(&snapshot).unwrap();
        assert_eq!(repo.load().unwrap(), Some(snapshot));
    }
}
