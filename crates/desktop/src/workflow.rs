//! Compound transaction creation: item → inventory → transaction.
//!
//! The three creates are issued strictly in order, each one only after the
//! previous response carried the identifier the next record references.
//! There is no idempotency key: re-running after a partial failure creates
//! fresh records rather than reusing the ones already written.

use stockdesk_client::{Backend, ClientError, SharedResource, assigned_id};
use stockdesk_core::{DomainError, Resource, StatusType};
use stockdesk_inventory::{Inventory, InventoryId, Item, ItemId, ItemLifecycle, Transaction};

/// Form payload of the transactions screen.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionInput {
    /// Item fields; identifier and lifecycle are ignored.
    pub item: Item,
    pub quantity: i64,
    pub min_stock: i64,
    pub price: f64,
}

impl Default for TransactionInput {
    fn default() -> Self {
        Self {
            item: Item::default(),
            quantity: 0,
            min_stock: 0,
            price: 0.0,
        }
    }
}

impl TransactionInput {
    pub fn validate(&self) -> Result<(), DomainError> {
        self.item.validate()?;
        if self.quantity < 0 {
            return Err(DomainError::validation("quantity cannot be negative"));
        }
        if self.min_stock < 0 {
            return Err(DomainError::validation("min_stock cannot be negative"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DomainError::validation("price must be a non-negative number"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStep {
    CreateItem,
    CreateInventory,
    CreateTransaction,
}

impl core::fmt::Display for WorkflowStep {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            WorkflowStep::CreateItem => "create item",
            WorkflowStep::CreateInventory => "create inventory",
            WorkflowStep::CreateTransaction => "create transaction",
        })
    }
}

/// What to do with records already created when a later step fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compensation {
    /// Leave them in place (orphans).
    #[default]
    None,
    /// Soft-delete them, most recent first.
    SoftDeleteCreated,
}

/// Identifiers written before the chain stopped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatedRecords {
    pub item: Option<ItemId>,
    pub inventory: Option<InventoryId>,
}

#[derive(Debug, thiserror::Error)]
#[error("transaction workflow failed at step '{step}': {source}")]
pub struct WorkflowError {
    pub step: WorkflowStep,
    pub created: CreatedRecords,
    #[source]
    pub source: ClientError,
    /// Compensating soft-deletes that failed in turn.
    pub compensation_failures: Vec<ClientError>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowReceipt {
    pub item: Item,
    pub inventory: Inventory,
    pub transaction: Transaction,
}

/// Pair a created record with the identifier the server assigned to it.
fn created_with_id<T: Resource>(result: Result<T, ClientError>) -> Result<(T::Id, T), ClientError> {
    let record = result?;
    Ok((assigned_id(&record)?, record))
}

pub struct TransactionWorkflow {
    items: SharedResource<Item>,
    inventories: SharedResource<Inventory>,
    transactions: SharedResource<Transaction>,
    compensation: Compensation,
}

impl TransactionWorkflow {
    pub fn new(backend: &Backend) -> Self {
        Self {
            items: backend.items.clone(),
            inventories: backend.inventories.clone(),
            transactions: backend.transactions.clone(),
            compensation: Compensation::None,
        }
    }

    pub fn with_compensation(mut self, compensation: Compensation) -> Self {
        self.compensation = compensation;
        self
    }

    pub fn compensation(&self) -> Compensation {
        self.compensation
    }

    pub async fn run(&self, input: &TransactionInput) -> Result<WorkflowReceipt, WorkflowError> {
        let mut created = CreatedRecords::default();

        if let Err(e) = input.validate() {
            return Err(self.fail(WorkflowStep::CreateItem, created, e.into()).await);
        }

        // Step 1: item, always active.
        let mut draft = input.item.without_id();
        draft.item_status = ItemLifecycle::Active;
        let (item_id, item) = match created_with_id(self.items.create(&draft).await) {
            Ok(pair) => pair,
            Err(e) => return Err(self.fail(WorkflowStep::CreateItem, created, e).await),
        };
        tracing::info!(step = %WorkflowStep::CreateItem, %item_id, "workflow step done");
        created.item = Some(item_id.clone());

        // Step 2: inventory for the new item.
        let draft = Inventory {
            id: None,
            item_id,
            stock: input.quantity,
            min_stock: Some(input.min_stock),
            inventory_status: StatusType::Active,
        };
        let (inventory_id, inventory) = match created_with_id(self.inventories.create(&draft).await) {
            Ok(pair) => pair,
            Err(e) => return Err(self.fail(WorkflowStep::CreateInventory, created, e).await),
        };
        tracing::info!(step = %WorkflowStep::CreateInventory, %inventory_id, "workflow step done");
        created.inventory = Some(inventory_id.clone());

        // Step 3: transaction against the new inventory.
        let mut draft = Transaction::new(inventory_id, input.quantity, Some(input.price));
        draft.transaction_status = Some(StatusType::Active);
        let transaction = match self.transactions.create(&draft).await {
            Ok(tx) => tx,
            Err(e) => return Err(self.fail(WorkflowStep::CreateTransaction, created, e).await),
        };
        tracing::info!(
            step = %WorkflowStep::CreateTransaction,
            transaction_id = ?transaction.id,
            "workflow step done"
        );

        Ok(WorkflowReceipt {
            item,
            inventory,
            transaction,
        })
    }

    async fn fail(&self, step: WorkflowStep, created: CreatedRecords, source: ClientError) -> WorkflowError {
        tracing::warn!(%step, error = %source, ?created, "transaction workflow aborted");

        let mut compensation_failures = Vec::new();
        if self.compensation == Compensation::SoftDeleteCreated {
            if let Some(id) = &created.inventory {
                if let Err(e) = self.inventories.soft_delete(id).await {
                    tracing::warn!(inventory_id = %id, error = %e, "compensating soft-delete failed");
                    compensation_failures.push(e);
                }
            }
            if let Some(id) = &created.item {
                if let Err(e) = self.items.soft_delete(id).await {
                    tracing::warn!(item_id = %id, error = %e, "compensating soft-delete failed");
                    compensation_failures.push(e);
                }
            }
        }

        WorkflowError {
            step,
            created,
            source,
            compensation_failures,
        }
    }
}
