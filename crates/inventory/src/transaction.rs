//! Stock transactions.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value as JsonValue, json};

use stockdesk_core::{DomainError, DomainResult, Resource, StatusType};

use crate::stock::InventoryId;

stockdesk_core::record_id! {
    /// Transaction identifier (assigned by the REST collaborator).
    TransactionId
}

/// Stock transaction against one inventory row.
///
/// `transaction_status` is optional on the wire: rows written before soft
/// deletion existed carry no status and read as active.
///
/// `transaction_date` is stamped by the server and kept as the text it sent;
/// [`Transaction::date`] parses it when needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredTransaction")]
pub struct Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TransactionId>,
    pub inventory_id: InventoryId,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_status: Option<StatusType>,
}

/// Stored shape: older rows name the key `transaction_id`, and json-server
/// adds `id` next to it.
#[derive(Deserialize)]
struct StoredTransaction {
    #[serde(default)]
    id: Option<TransactionId>,
    #[serde(default)]
    transaction_id: Option<TransactionId>,
    inventory_id: InventoryId,
    #[serde(default)]
    quantity: i64,
    #[serde(default)]
    price: Option<f64>,
    #[serde(default)]
    transaction_date: Option<String>,
    #[serde(default)]
    transaction_status: Option<StatusType>,
}

impl From<StoredTransaction> for Transaction {
    fn from(row: StoredTransaction) -> Self {
        Self {
            id: row.id.or(row.transaction_id),
            inventory_id: row.inventory_id,
            quantity: row.quantity,
            price: row.price,
            transaction_date: row.transaction_date,
            transaction_status: row.transaction_status,
        }
    }
}

impl Transaction {
    pub fn new(inventory_id: InventoryId, quantity: i64, price: Option<f64>) -> Self {
        Self {
            id: None,
            inventory_id,
            quantity,
            price,
            transaction_date: None,
            transaction_status: None,
        }
    }

    /// Server timestamp, read as RFC 3339 or as a bare `YYYY-MM-DD` date
    /// (midnight UTC). `None` when absent or unreadable.
    pub fn date(&self) -> Option<DateTime<Utc>> {
        let raw = self.transaction_date.as_deref()?.trim();
        if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
            return Some(at.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|at| at.and_utc())
    }

    /// `quantity * price`, when a price is known.
    pub fn total(&self) -> Option<f64> {
        self.price.map(|p| p * self.quantity as f64)
    }
}

impl Resource for Transaction {
    type Id = TransactionId;

    const PATH: &'static str = "transactions";
    const NAME: &'static str = "transaction";

    fn id(&self) -> Option<&TransactionId> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: Option<TransactionId>) {
        self.id = id;
    }

    fn lifecycle(&self) -> StatusType {
        self.transaction_status.unwrap_or_default()
    }

    fn soft_delete_patch() -> JsonValue {
        json!({ "transaction_status": StatusType::Inactive.as_str() })
    }

    fn validate(&self) -> DomainResult<()> {
        if self.quantity < 0 {
            return Err(DomainError::validation("quantity cannot be negative"));
        }
        if self.price.is_some_and(|p| !p.is_finite() || p < 0.0) {
            return Err(DomainError::validation("price must be a non-negative number"));
        }
        Ok(())
    }
}
