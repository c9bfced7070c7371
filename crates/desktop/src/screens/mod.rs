//! One screen per record family.
//!
//! Every screen follows the same life cycle: `load` fetches, `edit` / `cancel`
//! drive the form, `save` persists and refreshes, `delete` soft-deletes and
//! refreshes, `apply_filter` / `clear_filters` drive the list.

pub mod employees;
pub mod inventory;
pub mod items;
pub mod suppliers;
pub mod transactions;

pub use employees::{EmployeeForm, EmployeesScreen};
pub use inventory::{InventoryForm, InventoryScreen};
pub use items::ItemsScreen;
pub use suppliers::SuppliersScreen;
pub use transactions::TransactionsScreen;

use stockdesk_client::{ClientError, SharedResource};
use stockdesk_core::{ListFilter, Resource};

use crate::error::ScreenResult;
use crate::form::{FormController, FormMode, FormModel};
use crate::list_view::ListView;

type IdOf<M> = <<M as FormModel>::Record as Resource>::Id;

/// List plus create/edit form over one resource.
pub struct RecordScreen<M: FormModel, F: ListFilter<M::Record>> {
    list: ListView<M::Record, F>,
    form: FormController<M>,
}

impl<M: FormModel, F: ListFilter<M::Record>> RecordScreen<M, F> {
    pub fn new(api: SharedResource<M::Record>) -> Self {
        Self {
            list: ListView::new(api),
            form: FormController::new(),
        }
    }

    pub async fn load(&mut self) -> ScreenResult<&[M::Record]> {
        Ok(self.list.refresh().await?)
    }

    /// Visible rows as of the last load.
    pub fn records(&self) -> &[M::Record] {
        self.list.records()
    }

    pub fn list(&self) -> &ListView<M::Record, F> {
        &self.list
    }

    pub fn fields(&self) -> &M {
        self.form.fields()
    }

    pub fn fields_mut(&mut self) -> &mut M {
        self.form.fields_mut()
    }

    pub fn mode(&self) -> &FormMode<IdOf<M>> {
        self.form.mode()
    }

    /// Start editing the visible record with `id`.
    pub fn edit(&mut self, id: &IdOf<M>) -> ScreenResult<()> {
        let record = self
            .list
            .records()
            .iter()
            .find(|r| r.id() == Some(id))
            .cloned()
            .ok_or_else(|| ClientError::not_found::<M::Record>(id))?;
        self.form.edit(&record)?;
        Ok(())
    }

    pub fn cancel(&mut self) {
        self.form.cancel();
    }

    /// Persist the form, then reload the list.
    ///
    /// An error means nothing was written. Once the write succeeds a failed
    /// reload is only logged; the rows stay stale until the next `load`.
    pub async fn save(&mut self) -> ScreenResult<M::Record> {
        let api = self.list.api().clone();
        let saved = self.form.save(api.as_ref()).await?;
        self.reload_after_write().await;
        Ok(saved)
    }

    /// Soft-delete `id`, then reload the list. Reload failures are handled
    /// as in [`save`](Self::save).
    pub async fn delete(&mut self, id: &IdOf<M>) -> ScreenResult<()> {
        self.list.api().soft_delete(id).await?;
        if self.form.mode().editing_id() == Some(id) {
            self.form.cancel();
        }
        self.reload_after_write().await;
        Ok(())
    }

    async fn reload_after_write(&mut self) {
        if let Err(e) = self.list.refresh().await {
            tracing::warn!(
                resource = <M::Record as Resource>::NAME,
                error = %e,
                "write succeeded but list reload failed"
            );
        }
    }

    pub async fn apply_filter(&mut self, filter: F) -> ScreenResult<&[M::Record]> {
        Ok(self.list.set_filter(filter).await?)
    }

    pub async fn clear_filters(&mut self) -> ScreenResult<&[M::Record]> {
        Ok(self.list.clear().await?)
    }
}
