//! Resource trait: a record family persisted behind one REST endpoint.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::error::DomainResult;
use crate::id::RecordKey;
use crate::lifecycle::StatusType;

/// A record family served at `/{PATH}` by the REST collaborator.
///
/// Identifiers are optional on the record itself: they are absent on drafts
/// and filled in by the server on creation.
pub trait Resource: Clone + core::fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Strongly-typed record identifier.
    type Id: Clone
        + Eq
        + core::hash::Hash
        + core::fmt::Debug
        + core::fmt::Display
        + From<RecordKey>
        + Into<RecordKey>
        + Send
        + Sync;

    /// Collection path segment, e.g. `"items"`.
    const PATH: &'static str;

    /// Human-readable resource name for logs and errors.
    const NAME: &'static str;

    /// Returns the server-assigned identifier, if any.
    fn id(&self) -> Option<&Self::Id>;

    /// Replaces (or clears) the identifier.
    fn set_id(&mut self, id: Option<Self::Id>);

    /// Current lifecycle status, normalised.
    fn lifecycle(&self) -> StatusType;

    /// JSON body of the partial update that flips the record to inactive.
    fn soft_delete_patch() -> JsonValue;

    /// Client-side validation, run before any create/update call.
    fn validate(&self) -> DomainResult<()> {
        Ok(())
    }

    fn is_active(&self) -> bool {
        self.lifecycle().is_active()
    }

    /// Copy of the record without an identifier (create bodies never carry one).
    fn without_id(&self) -> Self {
        let mut draft = self.clone();
        draft.set_id(None);
        draft
    }
}
