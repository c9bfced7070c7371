//! In-memory implementation of [`ResourceApi`].
//!
//! Mimics the json-server behaviour the HTTP client talks to: sequential
//! numeric ids, exact-match query parameters with `_gte` / `_lte` range
//! operators, full replace on update and merge-patch on soft delete.

use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use stockdesk_core::{QueryParams, RecordKey, Resource};

use crate::api::{ClientError, ClientResult, ResourceApi};

#[derive(Debug)]
struct Table<T> {
    rows: Vec<T>,
    next_id: u64,
}

/// In-memory record table.
///
/// Intended for tests and the offline demo. Not optimized for performance.
#[derive(Debug)]
pub struct InMemoryResource<T> {
    table: RwLock<Table<T>>,
}

impl<T: Resource> Default for InMemoryResource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Resource> InMemoryResource<T> {
    pub fn new() -> Self {
        Self::with_rows(Vec::new())
    }

    /// Seed the table. New ids continue after the highest numeric id seen.
    pub fn with_rows(rows: Vec<T>) -> Self {
        let next_id = rows
            .iter()
            .filter_map(|r| r.id().cloned())
            .filter_map(|id| Into::<RecordKey>::into(id).as_number())
            .max()
            .map_or(1, |max| max + 1);
        Self {
            table: RwLock::new(Table { rows, next_id }),
        }
    }

    /// Snapshot of every stored row, inactive ones included.
    pub fn rows(&self) -> ClientResult<Vec<T>> {
        let table = self.table.read().map_err(|_| poisoned())?;
        Ok(table.rows.clone())
    }

    fn position(rows: &[T], id: &T::Id) -> Option<usize> {
        rows.iter().position(|r| r.id() == Some(id))
    }
}

fn poisoned() -> ClientError {
    ClientError::Backend("lock poisoned".to_string())
}

fn to_json<T: Resource>(record: &T) -> ClientResult<JsonValue> {
    serde_json::to_value(record).map_err(|e| ClientError::Parse(format!("{}: {e}", T::NAME)))
}

fn from_json<T: Resource>(value: JsonValue) -> ClientResult<T> {
    serde_json::from_value(value).map_err(|e| ClientError::Parse(format!("{}: {e}", T::NAME)))
}

/// Render a scalar JSON value the way it appears in a query string.
fn render(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn compare(field: &JsonValue, bound: &str, accept: fn(f64, f64) -> bool) -> bool {
    let (Some(actual), Ok(bound)) = (field.as_f64(), bound.trim().parse::<f64>()) else {
        return false;
    };
    accept(actual, bound)
}

/// Whether a serialized row satisfies every query pair.
///
/// A row that lacks a queried field never matches.
fn matches_query(row: &JsonValue, query: &QueryParams) -> bool {
    query.pairs().iter().all(|(name, expected)| {
        if let Some(field) = name.strip_suffix("_gte") {
            return row.get(field).is_some_and(|v| compare(v, expected, |a, b| a >= b));
        }
        if let Some(field) = name.strip_suffix("_lte") {
            return row.get(field).is_some_and(|v| compare(v, expected, |a, b| a <= b));
        }
        row.get(name)
            .and_then(render)
            .is_some_and(|actual| actual == *expected)
    })
}

#[async_trait]
impl<T: Resource> ResourceApi<T> for InMemoryResource<T> {
    async fn list(&self, query: &QueryParams) -> ClientResult<Vec<T>> {
        let table = self.table.read().map_err(|_| poisoned())?;
        let mut out = Vec::new();
        for row in &table.rows {
            if matches_query(&to_json(row)?, query) {
                out.push(row.clone());
            }
        }
        Ok(out)
    }

    async fn create(&self, record: &T) -> ClientResult<T> {
        let mut table = self.table.write().map_err(|_| poisoned())?;

        let mut created = record.without_id();
        created.set_id(Some(T::Id::from(RecordKey::Number(table.next_id))));
        table.next_id += 1;
        table.rows.push(created.clone());

        Ok(created)
    }

    async fn update(&self, record: &T) -> ClientResult<T> {
        let id = record.id().ok_or(ClientError::MissingId(T::NAME))?;
        let mut table = self.table.write().map_err(|_| poisoned())?;

        let idx = Self::position(&table.rows, id).ok_or_else(|| ClientError::not_found::<T>(id))?;
        table.rows[idx] = record.clone();

        Ok(record.clone())
    }

    async fn soft_delete(&self, id: &T::Id) -> ClientResult<()> {
        let mut table = self.table.write().map_err(|_| poisoned())?;

        let idx = Self::position(&table.rows, id).ok_or_else(|| ClientError::not_found::<T>(id))?;
        let mut value = to_json(&table.rows[idx])?;
        if let (JsonValue::Object(fields), JsonValue::Object(patch)) = (&mut value, T::soft_delete_patch()) {
            fields.extend(patch);
        }
        table.rows[idx] = from_json(value)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockdesk_core::{ListFilter, StatusType};
    use stockdesk_inventory::{Inventory, InventoryFilter, InventoryId, Item, ItemId, ItemLifecycle};
    use stockdesk_parties::{Supplier, SupplierId};

    fn supplier(name: &str) -> Supplier {
        Supplier {
            id: None,
            name: name.to_string(),
            service_type: Default::default(),
            contact: "555-0100".to_string(),
            address: "Main St".to_string(),
            details: "-".to_string(),
            state: StatusType::Active,
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids_and_ignores_draft_ids() {
        let store = InMemoryResource::<Item>::new();
        let mut draft = Item::named("Drill");
        draft.id = Some(ItemId::from(500));

        let a = store.create(&draft).await.unwrap();
        let b = store.create(&Item::named("Saw")).await.unwrap();

        assert_eq!(a.id, Some(ItemId::from(1)));
        assert_eq!(b.id, Some(ItemId::from(2)));
    }

    #[tokio::test]
    async fn seeded_tables_continue_after_highest_id() {
        let mut seeded = Item::named("Hammer");
        seeded.id = Some(ItemId::from(7));
        let store = InMemoryResource::with_rows(vec![seeded]);

        let created = store.create(&Item::named("Level")).await.unwrap();
        assert_eq!(created.id, Some(ItemId::from(8)));
    }

    #[tokio::test]
    async fn update_rejects_missing_and_unknown_ids() {
        let store = InMemoryResource::<Supplier>::new();

        let err = store.update(&supplier("Acme")).await.unwrap_err();
        assert_eq!(err, ClientError::MissingId("supplier"));

        let mut ghost = supplier("Ghost");
        ghost.id = Some(SupplierId::from(42));
        let err = store.update(&ghost).await.unwrap_err();
        assert!(matches!(err, ClientError::NotFound { resource: "supplier", .. }));
        assert!(store.rows().unwrap().is_empty());
    }

    #[tokio::test]
    async fn soft_delete_flips_lifecycle_and_keeps_the_row() {
        let store = InMemoryResource::<Item>::new();
        let created = store.create(&Item::named("Drill")).await.unwrap();
        let id = created.id.clone().unwrap();

        store.soft_delete(&id).await.unwrap();

        let rows = store.rows().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].item_status, ItemLifecycle::Inactive);
        let visible: Vec<_> = rows.iter().filter(|i| i.is_active()).collect();
        assert!(visible.is_empty());
    }

    #[tokio::test]
    async fn range_operators_compare_numerically() {
        let store = InMemoryResource::with_rows(vec![
            Inventory {
                id: Some(InventoryId::from(1)),
                ..Inventory::for_item(ItemId::from(1), 3)
            },
            Inventory {
                id: Some(InventoryId::from(2)),
                ..Inventory::for_item(ItemId::from(2), 12)
            },
        ]);
        let filter = InventoryFilter {
            min_stock: Some(10),
            ..Default::default()
        };

        let rows = store.list(&filter.to_query()).await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].stock, 12);
    }

    #[tokio::test]
    async fn missing_field_never_matches() {
        let store = InMemoryResource::with_rows(vec![Inventory {
            id: Some(InventoryId::from(1)),
            ..Inventory::for_item(ItemId::from(1), 3)
        }]);
        let rows = store
            .list(&QueryParams::new().with("min_stock", 1))
            .await
            .unwrap();
        assert!(rows.is_empty());
    }
}
