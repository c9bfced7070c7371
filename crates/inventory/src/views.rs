//! Derived lookup views over freshly fetched collections.
//!
//! Views are rebuilt in full from each refetch; there is no incremental
//! patching. Malformed rows (no id, no name, dangling reference) are skipped
//! and reported, never fatal.

use std::collections::HashMap;

use stockdesk_core::Resource;

use crate::item::{Item, ItemId};
use crate::stock::{Inventory, InventoryId};
use crate::transaction::Transaction;

/// Why a record was left out of a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    MissingId,
    MissingName,
    UnresolvedInventory(InventoryId),
    UnresolvedItem(ItemId),
}

impl core::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SkipReason::MissingId => f.write_str("missing identifier"),
            SkipReason::MissingName => f.write_str("missing name"),
            SkipReason::UnresolvedInventory(id) => write!(f, "inventory {id} does not resolve"),
            SkipReason::UnresolvedItem(id) => write!(f, "item {id} does not resolve"),
        }
    }
}

/// A record excluded from a view, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub resource: &'static str,
    pub id: Option<String>,
    pub reason: SkipReason,
}

impl SkippedRecord {
    fn report(resource: &'static str, id: Option<String>, reason: SkipReason) -> Self {
        tracing::warn!(
            resource,
            id = id.as_deref().unwrap_or("<none>"),
            reason = %reason,
            "skipping malformed record"
        );
        Self { resource, id, reason }
    }
}

/// Items view: active subset plus id → name labels.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    active: Vec<Item>,
    by_id: HashMap<ItemId, Item>,
    skipped: Vec<SkippedRecord>,
}

impl ItemCatalog {
    pub fn build(items: &[Item]) -> Self {
        let mut catalog = Self::default();

        for item in items {
            let Some(id) = item.id.clone() else {
                catalog
                    .skipped
                    .push(SkippedRecord::report(Item::NAME, None, SkipReason::MissingId));
                continue;
            };
            if item.name.trim().is_empty() {
                catalog.skipped.push(SkippedRecord::report(
                    Item::NAME,
                    Some(id.to_string()),
                    SkipReason::MissingName,
                ));
                continue;
            }
            if item.is_active() {
                catalog.active.push(item.clone());
            }
            catalog.by_id.insert(id, item.clone());
        }

        catalog
    }

    /// Well-formed active items, in server order.
    pub fn active(&self) -> &[Item] {
        &self.active
    }

    /// Label for an item id (inactive items keep their label).
    pub fn name_of(&self, id: &ItemId) -> Option<&str> {
        self.by_id.get(id).map(|item| item.name.as_str())
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.by_id.get(id)
    }

    /// Whether `id` names a well-formed, active item.
    pub fn is_live(&self, id: &ItemId) -> bool {
        self.by_id.get(id).is_some_and(|item| item.is_active())
    }

    /// Snapshot of the id → name mapping.
    pub fn names(&self) -> HashMap<ItemId, String> {
        self.by_id
            .iter()
            .map(|(id, item)| (id.clone(), item.name.clone()))
            .collect()
    }

    pub fn skipped(&self) -> &[SkippedRecord] {
        &self.skipped
    }
}

/// Inventories view: active subset plus id → record lookup.
#[derive(Debug, Clone, Default)]
pub struct InventoryIndex {
    active: Vec<Inventory>,
    by_id: HashMap<InventoryId, Inventory>,
    skipped: Vec<SkippedRecord>,
}

impl InventoryIndex {
    pub fn build(inventories: &[Inventory]) -> Self {
        let mut index = Self::default();

        for inventory in inventories.iter().filter(|i| i.is_active()) {
            let Some(id) = inventory.id.clone() else {
                index.skipped.push(SkippedRecord::report(
                    Inventory::NAME,
                    None,
                    SkipReason::MissingId,
                ));
                continue;
            };
            index.active.push(inventory.clone());
            index.by_id.insert(id, inventory.clone());
        }

        index
    }

    pub fn active(&self) -> &[Inventory] {
        &self.active
    }

    pub fn get(&self, id: &InventoryId) -> Option<&Inventory> {
        self.by_id.get(id)
    }

    pub fn skipped(&self) -> &[SkippedRecord] {
        &self.skipped
    }
}

/// A transaction joined to its inventory row and item label.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub transaction: Transaction,
    pub inventory: Inventory,
    pub item_name: String,
}

/// Join active transactions to live inventories and items.
///
/// Rows whose references do not resolve are skipped and reported.
pub fn transaction_rows(
    transactions: &[Transaction],
    inventories: &InventoryIndex,
    items: &ItemCatalog,
) -> (Vec<TransactionRow>, Vec<SkippedRecord>) {
    let mut rows = Vec::new();
    let mut skipped = Vec::new();

    for tx in transactions.iter().filter(|t| t.is_active()) {
        let tx_id = tx.id.as_ref().map(ToString::to_string);
        let Some(inventory) = inventories.get(&tx.inventory_id) else {
            skipped.push(SkippedRecord::report(
                Transaction::NAME,
                tx_id,
                SkipReason::UnresolvedInventory(tx.inventory_id.clone()),
            ));
            continue;
        };
        if !items.is_live(&inventory.item_id) {
            skipped.push(SkippedRecord::report(
                Transaction::NAME,
                tx_id,
                SkipReason::UnresolvedItem(inventory.item_id.clone()),
            ));
            continue;
        }
        let item_name = items.name_of(&inventory.item_id).unwrap_or_default().to_string();
        rows.push(TransactionRow {
            transaction: tx.clone(),
            inventory: inventory.clone(),
            item_name,
        });
    }

    (rows, skipped)
}
