//! Stock rows (one per item).

use serde::{Deserialize, Serialize};
use serde_json::{Value as JsonValue, json};

use stockdesk_core::{DomainError, DomainResult, Resource, StatusType};

use crate::item::ItemId;

stockdesk_core::record_id! {
    /// Inventory identifier (assigned by the REST collaborator).
    InventoryId
}

/// Inventory record: stock level of one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<InventoryId>,
    pub item_id: ItemId,
    #[serde(default)]
    pub stock: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_stock: Option<i64>,
    #[serde(default)]
    pub inventory_status: StatusType,
}

impl Inventory {
    /// New active stock row for `item_id`.
    pub fn for_item(item_id: ItemId, stock: i64) -> Self {
        Self {
            id: None,
            item_id,
            stock,
            min_stock: None,
            inventory_status: StatusType::Active,
        }
    }

    /// Whether stock has dropped below the configured threshold.
    pub fn below_minimum(&self) -> bool {
        self.min_stock.is_some_and(|min| self.stock < min)
    }
}

impl Resource for Inventory {
    type Id = InventoryId;

    const PATH: &'static str = "inventories";
    const NAME: &'static str = "inventory";

    fn id(&self) -> Option<&InventoryId> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: Option<InventoryId>) {
        self.id = id;
    }

    fn lifecycle(&self) -> StatusType {
        self.inventory_status
    }

    fn soft_delete_patch() -> JsonValue {
        json!({ "inventory_status": StatusType::Inactive.as_str() })
    }

    fn validate(&self) -> DomainResult<()> {
        if self.stock < 0 {
            return Err(DomainError::validation("stock cannot be negative"));
        }
        if self.min_stock.is_some_and(|m| m < 0) {
            return Err(DomainError::validation("min_stock cannot be negative"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_negative_stock() {
        let mut inv = Inventory::for_item(ItemId::from(1), -1);
        assert!(inv.validate().is_err());

        inv.stock = 0;
        inv.min_stock = Some(-2);
        assert!(inv.validate().is_err());

        inv.min_stock = Some(0);
        assert!(inv.validate().is_ok());
    }

    #[test]
    fn below_minimum_only_with_threshold() {
        let mut inv = Inventory::for_item(ItemId::from(1), 2);
        assert!(!inv.below_minimum());
        inv.min_stock = Some(5);
        assert!(inv.below_minimum());
    }

    #[test]
    fn decodes_row_without_min_stock() {
        let inv: Inventory = serde_json::from_str(
            r#"{"id": "a9", "item_id": 3, "stock": 7, "inventory_status": "Active"}"#,
        )
        .unwrap();
        assert_eq!(inv.id, Some(InventoryId::from(stockdesk_core::RecordKey::Text("a9".into()))));
        assert_eq!(inv.item_id, ItemId::from(3));
        assert_eq!(inv.min_stock, None);
    }
}
