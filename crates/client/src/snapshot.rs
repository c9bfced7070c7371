//! json-server `db.json` documents held in memory.
//!
//! The document is one object keyed by collection path (`items`,
//! `inventories`, ...), each holding an array of rows. Missing collections
//! load as empty; rows that do not decode are logged and dropped.

use std::sync::Arc;

use serde_json::{Map, Value as JsonValue};

use stockdesk_core::Resource;
use stockdesk_inventory::{Inventory, Item, Transaction};
use stockdesk_parties::{Employee, Supplier};

use crate::api::{ClientError, ClientResult};
use crate::backend::Backend;
use crate::memory::InMemoryResource;

/// The five in-memory tables behind a [`Backend`], kept so they can be
/// written back out.
#[derive(Debug, Default)]
pub struct MemoryDb {
    items: Arc<InMemoryResource<Item>>,
    inventories: Arc<InMemoryResource<Inventory>>,
    transactions: Arc<InMemoryResource<Transaction>>,
    employees: Arc<InMemoryResource<Employee>>,
    suppliers: Arc<InMemoryResource<Supplier>>,
}

fn table<T: Resource>(doc: &Map<String, JsonValue>) -> ClientResult<Arc<InMemoryResource<T>>> {
    let rows = match doc.get(T::PATH) {
        None | Some(JsonValue::Null) => Vec::new(),
        Some(JsonValue::Array(rows)) => rows
            .iter()
            .filter_map(|row| match serde_json::from_value::<T>(row.clone()) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(resource = T::NAME, id = ?row.get("id"), error = %e, "skipping malformed row");
                    None
                }
            })
            .collect(),
        Some(_) => {
            return Err(ClientError::Parse(format!(
                "db collection '{}' is not an array",
                T::PATH
            )));
        }
    };
    Ok(Arc::new(InMemoryResource::with_rows(rows)))
}

fn rows_of<T: Resource>(table: &InMemoryResource<T>) -> ClientResult<JsonValue> {
    serde_json::to_value(table.rows()?).map_err(|e| ClientError::Parse(format!("{}: {e}", T::NAME)))
}

impl MemoryDb {
    pub fn from_json(doc: &JsonValue) -> ClientResult<Self> {
        let JsonValue::Object(doc) = doc else {
            return Err(ClientError::Parse("db document must be a JSON object".to_string()));
        };
        Ok(Self {
            items: table(doc)?,
            inventories: table(doc)?,
            transactions: table(doc)?,
            employees: table(doc)?,
            suppliers: table(doc)?,
        })
    }

    /// Current contents, inactive rows included.
    pub fn to_json(&self) -> ClientResult<JsonValue> {
        let mut doc = Map::new();
        doc.insert(Item::PATH.to_string(), rows_of(&self.items)?);
        doc.insert(Inventory::PATH.to_string(), rows_of(&self.inventories)?);
        doc.insert(Transaction::PATH.to_string(), rows_of(&self.transactions)?);
        doc.insert(Employee::PATH.to_string(), rows_of(&self.employees)?);
        doc.insert(Supplier::PATH.to_string(), rows_of(&self.suppliers)?);
        Ok(JsonValue::Object(doc))
    }

    /// Backend whose writes land in these tables.
    pub fn backend(&self) -> Backend {
        Backend {
            items: self.items.clone(),
            inventories: self.inventories.clone(),
            transactions: self.transactions.clone(),
            employees: self.employees.clone(),
            suppliers: self.suppliers.clone(),
        }
    }
}
