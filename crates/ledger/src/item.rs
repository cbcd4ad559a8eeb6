use serde::{Deserialize, Serialize};

use stockbook_core::ItemId;

/// Material type, mirroring the upstream ERP codes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemType {
    /// Spare part.
    Ersa,
    /// Non-valuated material.
    Nlag,
}

/// ABCZ prioritization tier.
///
/// The category a given `type` admits is constrained by the surrounding UI
/// at creation time; the core accepts any tier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    A,
    B,
    C,
    Z,
}

/// A stocked good.
///
/// Wire field names are camelCase to match the persisted document layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub specifications: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub category: ItemCategory,
    /// Opaque reference (URL or embedded data); not interpreted by the core.
    pub image: String,
    pub barcode: String,
    /// Current on-hand count. Never negative; over-withdrawal is rejected.
    pub quantity: u32,
    pub unit: String,
    pub shelf_number: String,
    /// Low-stock alerting threshold.
    pub min_level: u32,
    /// Overstock threshold; 0 means unset.
    pub max_level: u32,
    /// Unit cost.
    pub price: f64,
}

impl InventoryItem {
    /// An item at or below its alerting threshold.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_level
    }

    /// On-hand value at unit cost.
    pub fn stock_value(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }
}

/// Item input as supplied by external collaborators (UI forms, spreadsheet
/// import): everything but the allocated id and generated barcode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub name: String,
    pub specifications: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub category: ItemCategory,
    pub image: String,
    pub quantity: u32,
    pub unit: String,
    pub shelf_number: String,
    pub min_level: u32,
    pub max_level: u32,
    pub price: f64,
}

impl ItemDraft {
    /// Materialize the draft with its allocated identifier and barcode.
    pub fn into_item(self, id: ItemId, barcode: String) -> InventoryItem {
        InventoryItem {
            id,
            name: self.name,
            specifications: self.specifications,
            item_type: self.item_type,
            category: self.category,
            image: self.image,
            barcode,
            quantity: self.quantity,
            unit: self.unit,
            shelf_number: self.shelf_number,
            min_level: self.min_level,
            max_level: self.max_level,
            price: self.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> InventoryItem {
        InventoryItem {
            id: ItemId::new("MSP000001"),
            name: "Bearing 6204".to_string(),
            specifications: "20x47x14 sealed".to_string(),
            item_type: ItemType::Ersa,
            category: ItemCategory::A,
            image: String::new(),
            barcode: "123456789".to_string(),
            quantity: 4,
            unit: "piece".to_string(),
            shelf_number: "R2-S3".to_string(),
            min_level: 5,
            max_level: 50,
            price: 12.5,
        }
    }

    #[test]
    fn wire_names_are_camel_case() {
        let json = serde_json::to_value(item()).unwrap();
        assert_eq!(json["type"], "ERSA");
        assert_eq!(json["category"], "A");
        assert_eq!(json["shelfNumber"], "R2-S3");
        assert_eq!(json["minLevel"], 5);
        assert_eq!(json["maxLevel"], 50);
    }

    #[test]
    fn low_stock_is_at_or_below_min_level() {
        let mut i = item();
        assert!(i.is_low_stock());
        i.quantity = 6;
        assert!(!i.is_low_stock());
    }

    #[test]
    fn stock_value_is_quantity_times_price() {
        assert_eq!(item().stock_value(), 50.0);
    }
}
