//! Repository adapters for the ledger's storage port.
//!
//! The domain owns the `LedgerRepository` trait; this crate supplies the
//! concrete media: an in-memory adapter for tests/dev and an atomic
//! JSON-file adapter for durable single-process installs.

pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemoryRepository;
pub use json_file::JsonFileRepository;
