//! Mutation engine: the only writer of the ledger.
//!
//! Every operation validates, computes the new state, and commits both
//! collections before returning, so callers always observe item collection
//! and transaction log moving together.

use std::collections::HashSet;

use chrono::Utc;
use thiserror::Error;
use tracing::warn;

use stockbook_core::{barcode, DomainError, IdSequence, ItemId, TransactionId};

use crate::item::{InventoryItem, ItemDraft};
use crate::store::{LedgerRepository, LedgerStore, StorageError};
use crate::transaction::{Transaction, WithdrawalDetails};

/// Actor label on transactions created through the single-item flow.
pub const SYSTEM_SUPERVISOR: &str = "System Supervisor";

/// Actor label on transactions created through batch import.
pub const IMPORT_SUPERVISOR: &str = "Bulk Import";

/// Failure of a mutation operation: either a domain rejection or a storage
/// fault. Nothing here is fatal to the process; every failure is scoped to
/// the attempted operation.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Write-side of the ledger. Borrows the store exclusively for the duration
/// of a call site, matching the single-writer model.
#[derive(Debug)]
pub struct MutationEngine<'s, R: LedgerRepository> {
    store: &'s mut LedgerStore<R>,
}

impl<'s, R: LedgerRepository> MutationEngine<'s, R> {
    pub fn new(store: &'s mut LedgerStore<R>) -> Self {
        Self { store }
    }

    /// Create one item: allocate the next identifier and a fresh barcode,
    /// record a `NEW_ITEM` transaction, commit both collections.
    pub fn create_item(
        &mut self,
        draft: ItemDraft,
    ) -> Result<(InventoryItem, Transaction), EngineError> {
        let created = self.create_batch_with_label(vec![draft], SYSTEM_SUPERVISOR)?;
        let (mut items, mut transactions) = created;
        // Single-draft batch: exactly one of each.
        Ok((items.remove(0), transactions.remove(0)))
    }

    /// Create many items in one logical operation: one identifier scan plus a
    /// running counter yields a contiguous run of distinct ids; each item gets
    /// its own transaction; everything commits as a single snapshot write.
    pub fn create_items_batch(
        &mut self,
        drafts: Vec<ItemDraft>,
    ) -> Result<(Vec<InventoryItem>, Vec<Transaction>), EngineError> {
        self.create_batch_with_label(drafts, IMPORT_SUPERVISOR)
    }

    fn create_batch_with_label(
        &mut self,
        drafts: Vec<ItemDraft>,
        supervisor: &str,
    ) -> Result<(Vec<InventoryItem>, Vec<Transaction>), EngineError> {
        // Seed from item ids and logged item ids: transactions outlive item
        // deletion, which keeps identifiers from ever being reused.
        let mut sequence = IdSequence::seeded(
            self.store
                .items()
                .iter()
                .map(|i| &i.id)
                .chain(self.store.transactions().iter().map(|t| &t.item_id)),
        );

        let mut taken_barcodes: HashSet<String> = self
            .store
            .items()
            .iter()
            .map(|i| i.barcode.clone())
            .collect();

        let mut rng = rand::thread_rng();
        let mut created_items = Vec::with_capacity(drafts.len());
        let mut created_transactions = Vec::with_capacity(drafts.len());

        for draft in drafts {
            let id = sequence.next_id();
            let code = barcode::generate_unique(&mut rng, &taken_barcodes)?;
            taken_barcodes.insert(code.clone());

            let item = draft.into_item(id, code);
            created_transactions.push(Transaction::new_item(&item, supervisor, Utc::now()));
            created_items.push(item);
        }

        let mut items = self.store.items().to_vec();
        items.extend(created_items.iter().cloned());
        let mut transactions = self.store.transactions().to_vec();
        transactions.extend(created_transactions.iter().cloned());
        self.store.commit(items, transactions)?;

        Ok((created_items, created_transactions))
    }

    /// Remove an item. Returns whether anything was removed; an absent id is
    /// an idempotent no-op. Historical transactions stay in the log.
    pub fn delete_item(&mut self, id: &ItemId) -> Result<bool, EngineError> {
        if self.store.item(id).is_none() {
            return Ok(false);
        }
        let items: Vec<InventoryItem> = self
            .store
            .items()
            .iter()
            .filter(|i| &i.id != id)
            .cloned()
            .collect();
        self.store.commit_items(items)?;
        Ok(true)
    }

    /// Withdraw `quantity` units from an item.
    ///
    /// Rejects with `NotFound` for an unknown item and `InsufficientStock`
    /// when the request exceeds on-hand quantity; neither rejection mutates
    /// any state.
    pub fn withdraw(
        &mut self,
        item_id: &ItemId,
        quantity: u32,
        details: WithdrawalDetails,
    ) -> Result<Transaction, EngineError> {
        let Some(item) = self.store.item(item_id) else {
            warn!(%item_id, "withdrawal against unknown item");
            return Err(DomainError::not_found().into());
        };
        if quantity > item.quantity {
            warn!(
                %item_id,
                requested = quantity,
                available = item.quantity,
                "withdrawal rejected"
            );
            return Err(DomainError::insufficient_stock(quantity, item.quantity).into());
        }

        let transaction = Transaction::withdrawal(item, quantity, details, Utc::now());

        let items: Vec<InventoryItem> = self
            .store
            .items()
            .iter()
            .map(|i| {
                if &i.id == item_id {
                    let mut updated = i.clone();
                    updated.quantity -= quantity;
                    updated
                } else {
                    i.clone()
                }
            })
            .collect();
        let mut transactions = self.store.transactions().to_vec();
        transactions.push(transaction.clone());
        self.store.commit(items, transactions)?;

        Ok(transaction)
    }

    /// Purge a single transaction (audit trimming). Item state is untouched;
    /// an absent id is an idempotent no-op, reported through the return value.
    pub fn delete_transaction(&mut self, id: &TransactionId) -> Result<bool, EngineError> {
        if self.store.transaction(id).is_none() {
            return Ok(false);
        }
        let transactions: Vec<Transaction> = self
            .store
            .transactions()
            .iter()
            .filter(|t| &t.id != id)
            .cloned()
            .collect();
        self.store.commit_transactions(transactions)?;
        Ok(true)
    }
}
