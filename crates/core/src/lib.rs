//! `stockbook-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error taxonomy, strongly-typed identifiers, and code generation.

pub mod barcode;
pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{IdSequence, ItemId, TransactionId};
