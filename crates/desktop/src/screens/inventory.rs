//! Inventory screen: stock rows labelled with their item names.

use stockdesk_client::SharedResource;
use stockdesk_core::{DomainError, DomainResult, StatusType};
use stockdesk_inventory::{Inventory, InventoryFilter, InventoryId, Item, ItemCatalog, ItemId};

use super::RecordScreen;
use crate::error::ScreenResult;
use crate::form::{FormMode, FormModel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryForm {
    pub item_id: Option<ItemId>,
    pub stock: i64,
    pub min_stock: Option<i64>,
    pub inventory_status: StatusType,
}

impl Default for InventoryForm {
    fn default() -> Self {
        Self {
            item_id: None,
            stock: 1,
            min_stock: Some(1),
            inventory_status: StatusType::Active,
        }
    }
}

impl FormModel for InventoryForm {
    type Record = Inventory;

    fn from_record(inv: &Inventory) -> Self {
        Self {
            item_id: Some(inv.item_id.clone()),
            stock: inv.stock,
            min_stock: inv.min_stock,
            inventory_status: inv.inventory_status,
        }
    }

    fn to_record(&self) -> DomainResult<Inventory> {
        let item_id = self
            .item_id
            .clone()
            .ok_or_else(|| DomainError::validation("item is required"))?;
        Ok(Inventory {
            id: None,
            item_id,
            stock: self.stock,
            min_stock: self.min_stock,
            inventory_status: self.inventory_status,
        })
    }
}

pub struct InventoryScreen {
    records: RecordScreen<InventoryForm, InventoryFilter>,
    items: SharedResource<Item>,
    catalog: ItemCatalog,
}

impl InventoryScreen {
    pub fn new(inventories: SharedResource<Inventory>, items: SharedResource<Item>) -> Self {
        Self {
            records: RecordScreen::new(inventories),
            items,
            catalog: ItemCatalog::default(),
        }
    }

    /// Refetch the item catalog (for labels and the item picker), then the list.
    pub async fn load(&mut self) -> ScreenResult<&[Inventory]> {
        let items = self.items.list_all().await?;
        self.catalog = ItemCatalog::build(&items);
        self.records.load().await
    }

    pub fn records(&self) -> &[Inventory] {
        self.records.records()
    }

    /// Visible rows paired with their item label.
    pub fn labelled(&self) -> Vec<(&Inventory, &str)> {
        self.records()
            .iter()
            .map(|inv| (inv, self.catalog.name_of(&inv.item_id).unwrap_or("")))
            .collect()
    }

    /// Items offered by the item picker.
    pub fn selectable_items(&self) -> &[Item] {
        self.catalog.active()
    }

    pub fn fields(&self) -> &InventoryForm {
        self.records.fields()
    }

    pub fn fields_mut(&mut self) -> &mut InventoryForm {
        self.records.fields_mut()
    }

    pub fn mode(&self) -> &FormMode<InventoryId> {
        self.records.mode()
    }

    pub fn edit(&mut self, id: &InventoryId) -> ScreenResult<()> {
        self.records.edit(id)
    }

    pub fn cancel(&mut self) {
        self.records.cancel();
    }

    /// Persist the form. The referenced item must be live in the catalog.
    pub async fn save(&mut self) -> ScreenResult<Inventory> {
        if let Some(item_id) = &self.fields().item_id {
            if !self.catalog.is_live(item_id) {
                return Err(DomainError::broken_reference(format!(
                    "item {item_id} is missing or inactive"
                ))
                .into());
            }
        }
        self.records.save().await
    }

    pub async fn delete(&mut self, id: &InventoryId) -> ScreenResult<()> {
        self.records.delete(id).await
    }

    pub async fn apply_filter(&mut self, filter: InventoryFilter) -> ScreenResult<&[Inventory]> {
        self.records.apply_filter(filter).await
    }

    pub async fn clear_filters(&mut self) -> ScreenResult<&[Inventory]> {
        self.records.clear_filters().await
    }
}
