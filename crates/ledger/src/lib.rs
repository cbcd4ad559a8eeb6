//! Inventory ledger domain module.
//!
//! This crate contains the authoritative record of stock items plus the
//! append-only transaction log, the repository port it persists through, and
//! the mutation engine that enforces the ledger's invariants. Deterministic
//! domain logic only — no HTTP, no UI, no concrete storage medium.

pub mod engine;
pub mod item;
pub mod store;
pub mod transaction;

pub use engine::{EngineError, MutationEngine, IMPORT_SUPERVISOR, SYSTEM_SUPERVISOR};
pub use item::{InventoryItem, ItemCategory, ItemDraft, ItemType};
pub use store::{LedgerRepository, LedgerSnapshot, LedgerStore, StorageError};
pub use transaction::{Transaction, TransactionType, WithdrawalDetails};
