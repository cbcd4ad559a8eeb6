use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use stockbook_core::{ItemId, TransactionId};

use crate::item::InventoryItem;

/// Kind of a stock-affecting event.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    NewItem,
    /// Stock receipt. No core operation emits this today; the variant exists
    /// so ledgers containing receipts still load and report.
    In,
    Out,
}

/// Hand-over details recorded on an `OUT` transaction, as captured by the
/// stock-out flow for print tickets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalDetails {
    pub receiver_name: String,
    pub supervisor_name: String,
    pub location: String,
    pub delivery_date: NaiveDate,
    /// Embedded signature image, when one was captured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// An immutable ledger entry. Treat entries as facts: they are created once,
/// read many times, and never mutated — only explicitly purged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The affected item. May be an orphan once the item is deleted; every
    /// reader of the log tolerates that.
    pub item_id: ItemId,
    pub item_name: String,
    /// Magnitude of the event; the sign is implied by `type`.
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supervisor_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Transaction {
    /// Entry recording the creation of `item`, attributed to a system-level
    /// actor label.
    pub fn new_item(item: &InventoryItem, supervisor: &str, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: TransactionId::new(),
            timestamp,
            transaction_type: TransactionType::NewItem,
            item_id: item.id.clone(),
            item_name: item.name.clone(),
            quantity: item.quantity,
            receiver_name: None,
            supervisor_name: Some(supervisor.to_string()),
            location: None,
            delivery_date: None,
            signature: None,
            notes: None,
        }
    }

    /// Entry recording a withdrawal of `quantity` units from `item`.
    pub fn withdrawal(
        item: &InventoryItem,
        quantity: u32,
        details: WithdrawalDetails,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            timestamp,
            transaction_type: TransactionType::Out,
            item_id: item.id.clone(),
            item_name: item.name.clone(),
            quantity,
            receiver_name: Some(details.receiver_name),
            supervisor_name: Some(details.supervisor_name),
            location: Some(details.location),
            delivery_date: Some(details.delivery_date),
            signature: details.signature,
            notes: details.notes,
        }
    }
}
