//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Prefix of every well-formed item identifier.
pub const ITEM_ID_PREFIX: &str = "MSP";

/// Identifier of an inventory item (`MSP` + 6 zero-padded digits).
///
/// Identifiers loaded from storage are kept as-is even when malformed;
/// malformed ids simply do not participate in sequence allocation
/// (see [`IdSequence`]). Use [`ItemId::from_str`] when strict validation
/// of external input is wanted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Wrap a raw identifier without validating it.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build the canonical identifier for a sequence number.
    pub fn from_sequence(seq: u64) -> Self {
        Self(format!("{ITEM_ID_PREFIX}{seq:06}"))
    }

    /// Numeric suffix of a well-formed identifier, `None` when malformed.
    pub fn sequence(&self) -> Option<u64> {
        let digits = self.0.strip_prefix(ITEM_ID_PREFIX)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = Self::new(s);
        if id.sequence().is_none() {
            return Err(DomainError::invalid_id(format!(
                "ItemId: expected {ITEM_ID_PREFIX} followed by digits, got '{s}'"
            )));
        }
        Ok(id)
    }
}

/// Identifier of a ledger transaction.
///
/// Uses UUIDv7 (time-ordered), so ids created within the same instant —
/// e.g. during a batch import — are still distinct and sortable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Create a new identifier. Prefer passing ids explicitly in tests
    /// for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for TransactionId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s)
            .map_err(|e| DomainError::invalid_id(format!("TransactionId: {e}")))?;
        Ok(Self(uuid))
    }
}

/// Allocator for sequential item identifiers.
///
/// Seeded with one scan over the existing ids (malformed ids are ignored);
/// every subsequent draw advances a running counter, so a batch of N draws
/// yields N strictly increasing, distinct identifiers without rescanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    /// Seed from existing identifiers: next = max well-formed suffix + 1,
    /// or 1 when none match.
    pub fn seeded<'a, I>(existing: I) -> Self
    where
        I: IntoIterator<Item = &'a ItemId>,
    {
        let max = existing
            .into_iter()
            .filter_map(ItemId::sequence)
            .max()
            .unwrap_or(0);
        Self { next: max + 1 }
    }

    /// Draw the next identifier, advancing the counter.
    pub fn next_id(&mut self) -> ItemId {
        let id = ItemId::from_sequence(self.next);
        self.next += 1;
        id
    }
}
