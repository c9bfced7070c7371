//! List filters for the inventory resources.
//!
//! Query parameter mapping:
//!
//! | filter field                | query parameter     | client-side check        |
//! |-----------------------------|---------------------|--------------------------|
//! | `ItemFilter::status`        | `status`            | equality                 |
//! | `ItemFilter::item_type`     | `type`              | equality                 |
//! | `ItemFilter::category`      | `category`          | equality                 |
//! | `ItemFilter::measurement_unit` | `measurement_unit` | equality               |
//! | `InventoryFilter::min_stock`| `stock_gte`         | `stock >= min_stock`     |
//! | `InventoryFilter::item_id`  | `item_id`           | equality                 |
//! | `TransactionFilter::inventory_id` | `inventory_id` | equality                |

use stockdesk_core::{ListFilter, QueryParams};

use crate::item::{Item, ItemCategory, ItemId, ItemStatus, ItemType, MeasurementUnit};
use crate::stock::{Inventory, InventoryId};
use crate::transaction::Transaction;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    pub status: Option<ItemStatus>,
    pub item_type: Option<ItemType>,
    pub category: Option<ItemCategory>,
    pub measurement_unit: Option<MeasurementUnit>,
}

impl ListFilter<Item> for ItemFilter {
    fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("status", self.status)
            .push_opt("type", self.item_type)
            .push_opt("category", self.category)
            .push_opt("measurement_unit", self.measurement_unit);
        q
    }

    fn matches(&self, item: &Item) -> bool {
        self.status.is_none_or(|s| item.status == s)
            && self.item_type.is_none_or(|t| item.item_type == t)
            && self.category.is_none_or(|c| item.category == c)
            && self.measurement_unit.is_none_or(|u| item.measurement_unit == u)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryFilter {
    /// Show rows holding at least this much stock.
    pub min_stock: Option<i64>,
    pub item_id: Option<ItemId>,
}

impl ListFilter<Inventory> for InventoryFilter {
    fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("stock_gte", self.min_stock)
            .push_opt("item_id", self.item_id.as_ref());
        q
    }

    fn matches(&self, inventory: &Inventory) -> bool {
        self.min_stock.is_none_or(|min| inventory.stock >= min)
            && self.item_id.as_ref().is_none_or(|id| &inventory.item_id == id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub inventory_id: Option<InventoryId>,
}

impl ListFilter<Transaction> for TransactionFilter {
    fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.push_opt("inventory_id", self.inventory_id.as_ref());
        q
    }

    fn matches(&self, tx: &Transaction) -> bool {
        self.inventory_id
            .as_ref()
            .is_none_or(|id| &tx.inventory_id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn item_filter_maps_set_fields_only() {
        let f = ItemFilter {
            category: Some(ItemCategory::Consumables),
            measurement_unit: Some(MeasurementUnit::Liters),
            ..Default::default()
        };
        let q = f.to_query();
        assert_eq!(q.get("category"), Some("CONSUMABLES"));
        assert_eq!(q.get("measurement_unit"), Some("LITERS"));
        assert_eq!(q.get("status"), None);
        assert_eq!(q.pairs().len(), 2);
    }

    #[test]
    fn empty_filters_are_empty() {
        assert!(ListFilter::<Item>::is_empty(&ItemFilter::default()));
        assert!(ListFilter::<Inventory>::is_empty(&InventoryFilter::default()));
        assert!(ListFilter::<Transaction>::is_empty(&TransactionFilter::default()));
    }

    #[test]
    fn min_stock_is_sent_as_threshold_operator() {
        let f = InventoryFilter {
            min_stock: Some(10),
            ..Default::default()
        };
        assert_eq!(f.to_query().get("stock_gte"), Some("10"));
        assert_eq!(f.to_query().get("min_stock"), None);
    }

    #[test]
    fn item_filter_rechecks_server_predicates() {
        let f = ItemFilter {
            status: Some(ItemStatus::Defective),
            ..Default::default()
        };
        let mut item = Item::named("Saw");
        assert!(!f.matches(&item));
        item.status = ItemStatus::Defective;
        assert!(f.matches(&item));
    }

    proptest! {
        #[test]
        fn min_stock_predicate_is_a_threshold(stock in -50i64..500, min in 0i64..500) {
            let inv = Inventory::for_item(ItemId::from(1), stock);
            let f = InventoryFilter { min_stock: Some(min), ..Default::default() };
            prop_assert_eq!(f.matches(&inv), stock >= min);
        }
    }
}
