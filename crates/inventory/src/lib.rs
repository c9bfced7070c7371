//! Inventory records: items, stock rows and stock transactions.
//!
//! This crate contains the record shapes, their client-side validation, the
//! per-resource list filters and the derived lookup views. It performs no IO.

pub mod filter;
pub mod item;
pub mod stock;
pub mod transaction;
pub mod views;

pub use filter::{InventoryFilter, ItemFilter, TransactionFilter};
pub use item::{Item, ItemCategory, ItemId, ItemLifecycle, ItemStatus, ItemType, MeasurementUnit};
pub use stock::{Inventory, InventoryId};
pub use transaction::{Transaction, TransactionId};
pub use views::{
    InventoryIndex, ItemCatalog, SkipReason, SkippedRecord, TransactionRow, transaction_rows,
};
