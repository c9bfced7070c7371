//! Transactions screen.
//!
//! Creating a transaction runs the item → inventory → transaction workflow;
//! editing only touches quantity and price of the tracked transaction.

use stockdesk_client::{Backend, SharedResource};
use stockdesk_core::{DomainError, Resource};
use stockdesk_inventory::{
    Inventory, InventoryIndex, Item, ItemCatalog, SkippedRecord, Transaction, TransactionFilter,
    TransactionId, TransactionRow, transaction_rows,
};

use crate::error::ScreenResult;
use crate::form::FormMode;
use crate::list_view::ListView;
use crate::workflow::{Compensation, TransactionInput, TransactionWorkflow};

pub struct TransactionsScreen {
    items: SharedResource<Item>,
    inventories: SharedResource<Inventory>,
    workflow: TransactionWorkflow,
    list: ListView<Transaction, TransactionFilter>,
    catalog: ItemCatalog,
    index: InventoryIndex,
    rows: Vec<TransactionRow>,
    skipped: Vec<SkippedRecord>,
    input: TransactionInput,
    mode: FormMode<TransactionId>,
}

impl TransactionsScreen {
    pub fn new(backend: &Backend) -> Self {
        Self {
            items: backend.items.clone(),
            inventories: backend.inventories.clone(),
            workflow: TransactionWorkflow::new(backend),
            list: ListView::new(backend.transactions.clone()),
            catalog: ItemCatalog::default(),
            index: InventoryIndex::default(),
            rows: Vec::new(),
            skipped: Vec::new(),
            input: TransactionInput::default(),
            mode: FormMode::Create,
        }
    }

    pub fn with_compensation(mut self, compensation: Compensation) -> Self {
        self.workflow = self.workflow.with_compensation(compensation);
        self
    }

    /// Refetch items, inventories and transactions, then rebuild the joined rows.
    pub async fn load(&mut self) -> ScreenResult<&[TransactionRow]> {
        let items = self.items.list_all().await?;
        self.catalog = ItemCatalog::build(&items);
        let inventories = self.inventories.list_all().await?;
        self.index = InventoryIndex::build(&inventories);
        self.list.refresh().await?;
        self.rebuild_rows();
        Ok(&self.rows)
    }

    fn rebuild_rows(&mut self) {
        let (rows, skipped) = transaction_rows(self.list.records(), &self.index, &self.catalog);
        self.rows = rows;
        self.skipped = skipped;
    }

    pub fn rows(&self) -> &[TransactionRow] {
        &self.rows
    }

    /// Transactions left out of `rows` because a reference did not resolve.
    pub fn skipped(&self) -> &[SkippedRecord] {
        &self.skipped
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn inventories(&self) -> &InventoryIndex {
        &self.index
    }

    pub fn input(&self) -> &TransactionInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut TransactionInput {
        &mut self.input
    }

    pub fn mode(&self) -> &FormMode<TransactionId> {
        &self.mode
    }

    fn row(&self, id: &TransactionId) -> ScreenResult<&TransactionRow> {
        self.rows
            .iter()
            .find(|r| r.transaction.id.as_ref() == Some(id))
            .ok_or_else(|| {
                DomainError::broken_reference(format!(
                    "transaction {id} does not resolve to a live inventory and item"
                ))
                .into()
            })
    }

    /// Populate the form from the joined item, inventory and transaction.
    pub fn edit(&mut self, id: &TransactionId) -> ScreenResult<()> {
        let row = self.row(id)?;
        let item = self
            .catalog
            .get(&row.inventory.item_id)
            .map(Resource::without_id)
            .unwrap_or_default();
        let input = TransactionInput {
            item,
            quantity: row.transaction.quantity,
            min_stock: row.inventory.min_stock.unwrap_or(0),
            price: row.transaction.price.unwrap_or(0.0),
        };
        self.input = input;
        self.mode = FormMode::Edit(id.clone());
        Ok(())
    }

    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.input = TransactionInput::default();
        self.mode = FormMode::Create;
    }

    /// Create through the workflow, or update quantity/price when editing.
    ///
    /// On success the form resets and all three collections are refetched;
    /// a failed refetch is logged and the rows stay stale until the next
    /// `load`. An error means the write itself failed and the form is left
    /// as it was.
    pub async fn add_transaction(&mut self) -> ScreenResult<Transaction> {
        let saved = match &self.mode {
            FormMode::Create => self.workflow.run(&self.input).await?.transaction,
            FormMode::Edit(id) => {
                let mut tx = self.row(id)?.transaction.clone();
                tx.quantity = self.input.quantity;
                tx.price = Some(self.input.price);
                tx.validate()?;
                self.list.api().update(&tx).await?
            }
        };

        self.reset();
        self.reload_after_write().await;
        Ok(saved)
    }

    async fn reload_after_write(&mut self) {
        if let Err(e) = self.load().await {
            tracing::warn!(error = %e, "write succeeded but transactions reload failed");
        }
    }

    pub async fn delete(&mut self, id: &TransactionId) -> ScreenResult<()> {
        self.list.api().soft_delete(id).await?;
        if self.mode.editing_id() == Some(id) {
            self.reset();
        }
        self.reload_after_write().await;
        Ok(())
    }

    pub async fn apply_filter(&mut self, filter: TransactionFilter) -> ScreenResult<&[TransactionRow]> {
        self.list.set_filter(filter).await?;
        self.rebuild_rows();
        Ok(&self.rows)
    }

    pub async fn clear_filters(&mut self) -> ScreenResult<&[TransactionRow]> {
        self.list.clear().await?;
        self.rebuild_rows();
        Ok(&self.rows)
    }
}

