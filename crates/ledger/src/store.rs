//! Ledger store and the repository port it persists through.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use stockbook_core::{ItemId, TransactionId};

use crate::item::InventoryItem;
use crate::transaction::Transaction;

/// Storage-level error, reported by repository adapters.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted document does not deserialize. Loading fails fast with
    /// a diagnostic; the ledger is never silently replaced with an empty one.
    #[error("corrupt ledger document at {path}: {detail}")]
    Corrupt { path: String, detail: String },

    /// Backend-specific failure (e.g. a poisoned lock in the in-memory
    /// adapter).
    #[error("storage backend: {0}")]
    Backend(String),
}

/// The persisted unit: both collections in one document, saved atomically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    #[serde(default)]
    pub items: Vec<InventoryItem>,
    /// Creation order, oldest first. Never reordered in storage; newest-first
    /// presentation is a derived view.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// Port to durable storage. The core never talks to a concrete medium;
/// adapters live in `stockbook-storage`.
pub trait LedgerRepository {
    /// Reconstruct the last saved snapshot, `None` when no prior state exists.
    fn load(&self) -> Result<Option<LedgerSnapshot>, StorageError>;

    /// Persist the snapshot. A successful return means the whole document is
    /// durable; adapters must not leave a partially written ledger behind.
    fn save(&self, snapshot: &LedgerSnapshot) -> Result<(), StorageError>;
}

/// The authoritative in-memory ledger, write-through to its repository.
///
/// Single-writer by construction: the store is exclusively owned by the
/// process that opened it, so there is no locking discipline here.
#[derive(Debug)]
pub struct LedgerStore<R: LedgerRepository> {
    snapshot: LedgerSnapshot,
    repository: R,
}

impl<R: LedgerRepository> LedgerStore<R> {
    /// Load prior state from the repository, or start empty (no seed data).
    pub fn open(repository: R) -> Result<Self, StorageError> {
        let snapshot = repository.load()?.unwrap_or_default();
        info!(
            items = snapshot.items.len(),
            transactions = snapshot.transactions.len(),
            "ledger loaded"
        );
        Ok(Self {
            snapshot,
            repository,
        })
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.snapshot.items
    }

    pub fn item(&self, id: &ItemId) -> Option<&InventoryItem> {
        self.snapshot.items.iter().find(|i| &i.id == id)
    }

    /// The log in true creation order (oldest first).
    pub fn transactions(&self) -> &[Transaction] {
        &self.snapshot.transactions
    }

    /// Presentation view of the log, newest first.
    pub fn transactions_newest_first(&self) -> impl Iterator<Item = &Transaction> {
        self.snapshot.transactions.iter().rev()
    }

    pub fn transaction(&self, id: &TransactionId) -> Option<&Transaction> {
        self.snapshot.transactions.iter().find(|t| &t.id == id)
    }

    pub fn snapshot(&self) -> &LedgerSnapshot {
        &self.snapshot
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Replace the item collection and persist.
    pub fn commit_items(&mut self, items: Vec<InventoryItem>) -> Result<(), StorageError> {
        self.snapshot.items = items;
        self.persist()
    }

    /// Replace the transaction log and persist.
    pub fn commit_transactions(
        &mut self,
        transactions: Vec<Transaction>,
    ) -> Result<(), StorageError> {
        self.snapshot.transactions = transactions;
        self.persist()
    }

    /// Replace both collections in one logical operation and persist once.
    pub fn commit(
        &mut self,
        items: Vec<InventoryItem>,
        transactions: Vec<Transaction>,
    ) -> Result<(), StorageError> {
        self.snapshot.items = items;
        self.snapshot.transactions = transactions;
        self.persist()
    }

    fn persist(&self) -> Result<(), StorageError> {
        self.repository.save(&self.snapshot)?;
        info!(
            items = self.snapshot.items.len(),
            transactions = self.snapshot.transactions.len(),
            "ledger committed"
        );
        Ok(())
    }
}
