//! Dashboard headline statistics, derived per render from the ledger.

use serde::Serialize;

use stockbook_core::ItemId;
use stockbook_ledger::{InventoryItem, ItemCategory, Transaction};

/// Item counts per ABCZ tier, for the category distribution chart.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryBreakdown {
    pub a: usize,
    pub b: usize,
    pub c: usize,
    pub z: usize,
}

/// Headline figures shown above the KPI panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_items: usize,
    /// Sum of on-hand quantities across all items.
    pub total_units: u64,
    /// Sum of quantity × unit cost.
    pub total_value: f64,
    /// Items at or below their alerting threshold.
    pub low_stock: Vec<ItemId>,
    pub categories: CategoryBreakdown,
}

impl DashboardSummary {
    pub fn compute(items: &[InventoryItem]) -> Self {
        let mut categories = CategoryBreakdown::default();
        for item in items {
            match item.category {
                ItemCategory::A => categories.a += 1,
                ItemCategory::B => categories.b += 1,
                ItemCategory::C => categories.c += 1,
                ItemCategory::Z => categories.z += 1,
            }
        }

        Self {
            total_items: items.len(),
            total_units: items.iter().map(|i| u64::from(i.quantity)).sum(),
            total_value: items.iter().map(InventoryItem::stock_value).sum(),
            low_stock: items
                .iter()
                .filter(|i| i.is_low_stock())
                .map(|i| i.id.clone())
                .collect(),
            categories,
        }
    }
}

/// The `limit` most recent log entries, newest first.
pub fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<&Transaction> {
    transactions.iter().rev().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use stockbook_core::TransactionId;
    use stockbook_ledger::{ItemType, TransactionType};

    fn item(id: &str, quantity: u32, min_level: u32, price: f64, category: ItemCategory) -> InventoryItem {
        InventoryItem {
            id: ItemId::new(id),
            name: format!("item {id}"),
            specifications: String::new(),
            item_type: ItemType::Nlag,
            category,
            image: String::new(),
            barcode: "100000001".to_string(),
            quantity,
            unit: "piece".to_string(),
            shelf_number: String::new(),
            min_level,
            max_level: 0,
            price,
        }
    }

    #[test]
    fn summary_totals_and_low_stock() {
        let items = vec![
            item("MSP000001", 10, 2, 1.5, ItemCategory::A),
            item("MSP000002", 1, 2, 4.0, ItemCategory::C),
            item("MSP000003", 0, 0, 9.0, ItemCategory::Z),
        ];
        let summary = DashboardSummary::compute(&items);

        assert_eq!(summary.total_items, 3);
        assert_eq!(summary.total_units, 11);
        assert_eq!(summary.total_value, 19.0);
        // quantity <= min_level: the second and third items.
        assert_eq!(
            summary.low_stock,
            vec![ItemId::new("MSP000002"), ItemId::new("MSP000003")]
        );
        assert_eq!(summary.categories.a, 1);
        assert_eq!(summary.categories.b, 0);
        assert_eq!(summary.categories.c, 1);
        assert_eq!(summary.categories.z, 1);
    }

    #[test]
    fn recent_transactions_are_newest_first_and_capped() {
        let log: Vec<Transaction> = (0u64..8)
            .map(|i| Transaction {
                id: TransactionId::new(),
                timestamp: Utc::now(),
                transaction_type: TransactionType::NewItem,
                item_id: ItemId::from_sequence(i + 1),
                item_name: format!("item {i}"),
                quantity: 1,
                receiver_name: None,
                supervisor_name: None,
                location: None,
                delivery_date: None,
                signature: None,
                notes: None,
            })
            .collect();

        let recent = recent_transactions(&log, 5);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].item_id, ItemId::from_sequence(8));
        assert_eq!(recent[4].item_id, ItemId::from_sequence(4));
    }
}
