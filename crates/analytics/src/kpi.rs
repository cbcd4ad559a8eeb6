//! Operational KPI formulas.
//!
//! Every function returns an integer percentage in `0..=100`, rounded to the
//! nearest whole number, with an explicit result for the zero-denominator
//! case instead of a division by zero.
//!
//! "Newest transaction for an item" means a newest-first scan of the log
//! filtered by item id; "first NEW_ITEM" means an oldest-first scan. Ties
//! between equal timestamps resolve by log order, which storage preserves.

use chrono::{DateTime, Months, Utc};
use serde::Serialize;

use stockbook_core::ItemId;
use stockbook_ledger::{InventoryItem, ItemCategory, Transaction, TransactionType};

fn newest_for<'a>(transactions: &'a [Transaction], item_id: &ItemId) -> Option<&'a Transaction> {
    transactions.iter().rev().find(|t| &t.item_id == item_id)
}

fn newest_out_for<'a>(
    transactions: &'a [Transaction],
    item_id: &ItemId,
) -> Option<&'a Transaction> {
    transactions
        .iter()
        .rev()
        .find(|t| &t.item_id == item_id && t.transaction_type == TransactionType::Out)
}

fn first_creation_for<'a>(
    transactions: &'a [Transaction],
    item_id: &ItemId,
) -> Option<&'a Transaction> {
    transactions
        .iter()
        .find(|t| &t.item_id == item_id && t.transaction_type == TransactionType::NewItem)
}

fn percent(numerator: usize, denominator: usize) -> u8 {
    // Callers handle denominator == 0 explicitly.
    ((numerator as f64 / denominator as f64) * 100.0).round() as u8
}

/// Share of demand events fulfilled without a stockout proxy condition:
/// `1 − zeroStock / (outCount + zeroStock)`. Returns 100 when there is no
/// demand and no stockout to measure.
pub fn service_level(items: &[InventoryItem], transactions: &[Transaction]) -> u8 {
    let demand = transactions
        .iter()
        .filter(|t| t.transaction_type == TransactionType::Out)
        .count();
    let stockouts = items.iter().filter(|i| i.quantity == 0).count();
    let denominator = demand + stockouts;
    if denominator == 0 {
        return 100;
    }
    ((1.0 - stockouts as f64 / denominator as f64) * 100.0).round() as u8
}

/// Among items whose first `NEW_ITEM` entry predates one year before `now`:
/// the share with no transaction at all in the last 12 months (a proxy for
/// "not recounted"). Items without a creation entry are treated as new.
pub fn cycle_counting_completion(
    items: &[InventoryItem],
    transactions: &[Transaction],
    now: DateTime<Utc>,
) -> u8 {
    let one_year_ago = now - Months::new(12);

    let old_items: Vec<&InventoryItem> = items
        .iter()
        .filter(|item| {
            first_creation_for(transactions, &item.id)
                .is_some_and(|t| t.timestamp < one_year_ago)
        })
        .collect();
    if old_items.is_empty() {
        return 0;
    }

    let uncounted = old_items
        .iter()
        .filter(|item| match newest_for(transactions, &item.id) {
            None => true,
            Some(t) => t.timestamp < one_year_ago,
        })
        .count();

    percent(uncounted, old_items.len())
}

/// Fixed placeholder: no adjustment transaction type exists to drive a real
/// accuracy figure, so the metric reports 100.
pub fn accuracy(_transactions: &[Transaction]) -> u8 {
    100
}

/// Share of items with zero on-hand quantity whose last `OUT` is either
/// absent or older than three months before `now`.
pub fn non_used_materials(
    items: &[InventoryItem],
    transactions: &[Transaction],
    now: DateTime<Utc>,
) -> u8 {
    if items.is_empty() {
        return 0;
    }
    let three_months_ago = now - Months::new(3);

    let unused = items
        .iter()
        .filter(|item| {
            if item.quantity > 0 {
                return false;
            }
            match newest_out_for(transactions, &item.id) {
                None => true,
                Some(t) => t.timestamp < three_months_ago,
            }
        })
        .count();

    percent(unused, items.len())
}

/// `(stagnant − stagnantInAOrZ) / totalItems`, where stagnant items have no
/// transaction newer than three years before `now` (or none at all).
pub fn obsolete_materials(
    items: &[InventoryItem],
    transactions: &[Transaction],
    now: DateTime<Utc>,
) -> u8 {
    if items.is_empty() {
        return 0;
    }
    let three_years_ago = now - Months::new(36);

    let stagnant: Vec<&InventoryItem> = items
        .iter()
        .filter(|item| match newest_for(transactions, &item.id) {
            None => true,
            Some(t) => t.timestamp < three_years_ago,
        })
        .collect();

    let prioritized = stagnant
        .iter()
        .filter(|i| matches!(i.category, ItemCategory::A | ItemCategory::Z))
        .count();

    percent(stagnant.len() - prioritized, items.len())
}

/// Share of items whose specifications text exceeds five characters — the
/// proxy for "linked to a bill of materials".
pub fn bom_completion(items: &[InventoryItem]) -> u8 {
    if items.is_empty() {
        return 0;
    }
    let linked = items
        .iter()
        .filter(|i| i.specifications.chars().count() > 5)
        .count();
    percent(linked, items.len())
}

/// Share of items carrying one of the {A, B, C, Z} tiers. Always 100 under
/// this type system, computed the same way as the other metrics for parity.
pub fn abcz_completion(items: &[InventoryItem]) -> u8 {
    if items.is_empty() {
        return 0;
    }
    let classified = items
        .iter()
        .filter(|i| {
            matches!(
                i.category,
                ItemCategory::A | ItemCategory::B | ItemCategory::C | ItemCategory::Z
            )
        })
        .count();
    percent(classified, items.len())
}

/// All seven KPIs for one render cycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiReport {
    pub service_level: u8,
    pub cycle_counting_completion: u8,
    pub accuracy: u8,
    pub non_used_materials: u8,
    pub obsolete_materials: u8,
    pub bom_completion: u8,
    pub abcz_completion: u8,
}

impl KpiReport {
    pub fn compute(
        items: &[InventoryItem],
        transactions: &[Transaction],
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            service_level: service_level(items, transactions),
            cycle_counting_completion: cycle_counting_completion(items, transactions, now),
            accuracy: accuracy(transactions),
            non_used_materials: non_used_materials(items, transactions, now),
            obsolete_materials: obsolete_materials(items, transactions, now),
            bom_completion: bom_completion(items),
            abcz_completion: abcz_completion(items),
        }
    }
}
