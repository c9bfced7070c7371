//! Create/edit form state machine.

use stockdesk_client::{ClientError, ResourceApi};
use stockdesk_core::{DomainError, DomainResult, Resource};

/// Whether the form creates a new record or edits a tracked one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode<Id> {
    Create,
    Edit(Id),
}

impl<Id> Default for FormMode<Id> {
    fn default() -> Self {
        FormMode::Create
    }
}

impl<Id> FormMode<Id> {
    pub fn is_editing(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }

    pub fn editing_id(&self) -> Option<&Id> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error(transparent)]
    Invalid(#[from] DomainError),
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Editable field set behind a form.
///
/// `Default` is the reset state (enums at their designated default member).
pub trait FormModel: Clone + Default {
    type Record: Resource;

    /// Populate fields from a stored record. The identifier is not part of
    /// the fields; the controller tracks it separately.
    fn from_record(record: &Self::Record) -> Self;

    /// Build a record (without identifier) from the fields, failing on
    /// fields that cannot be converted.
    fn to_record(&self) -> DomainResult<Self::Record>;
}

type IdOf<M> = <<M as FormModel>::Record as Resource>::Id;

#[derive(Debug, Clone, Default)]
pub struct FormController<M: FormModel> {
    fields: M,
    mode: FormMode<IdOf<M>>,
}

impl<M: FormModel> FormController<M> {
    pub fn new() -> Self {
        Self {
            fields: M::default(),
            mode: FormMode::Create,
        }
    }

    pub fn fields(&self) -> &M {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut M {
        &mut self.fields
    }

    pub fn mode(&self) -> &FormMode<IdOf<M>> {
        &self.mode
    }

    /// Switch to edit mode for `record`. Records without an identifier
    /// cannot be edited.
    pub fn edit(&mut self, record: &M::Record) -> Result<(), FormError> {
        let id = record
            .id()
            .cloned()
            .ok_or(ClientError::MissingId(M::Record::NAME))?;
        self.fields = M::from_record(record);
        self.mode = FormMode::Edit(id);
        Ok(())
    }

    /// Drop pending changes and return to create mode.
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.fields = M::default();
        self.mode = FormMode::Create;
    }

    /// Validate, then create or update depending on the mode.
    ///
    /// On success the form resets; on failure fields and mode are kept.
    pub async fn save(&mut self, api: &dyn ResourceApi<M::Record>) -> Result<M::Record, FormError> {
        let mut record = self.fields.to_record()?;
        record.set_id(self.mode.editing_id().cloned());
        record.validate()?;

        let saved = match &self.mode {
            FormMode::Create => api.create(&record).await?,
            FormMode::Edit(_) => api.update(&record).await?,
        };

        self.reset();
        Ok(saved)
    }
}
