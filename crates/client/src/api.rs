//! Resource client contract and error model.

use std::sync::Arc;

use async_trait::async_trait;

use stockdesk_core::{DomainError, QueryParams, Resource};

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({status}) from {resource}: {body}")]
    Api {
        resource: &'static str,
        status: u16,
        body: String,
    },
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: String },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("{0} record has no identifier")]
    MissingId(&'static str),
    #[error("backend error: {0}")]
    Backend(String),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ClientError {
    pub fn not_found<T: Resource>(id: &T::Id) -> Self {
        Self::NotFound {
            resource: T::NAME,
            id: id.to_string(),
        }
    }
}

/// CRUD access to one record family.
///
/// - `list` returns every row the server matched for `query`, inactive rows
///   included; hiding them is the view's job. Rows that do not decode are
///   logged and left out rather than failing the whole list.
/// - `create` never sends an identifier; the returned record carries the one
///   the server assigned.
/// - `update` is a full replace of an existing record and fails with
///   `MissingId` before any IO when the record has no identifier.
/// - `soft_delete` is a partial update flipping the lifecycle field.
#[async_trait]
pub trait ResourceApi<T: Resource>: Send + Sync {
    async fn list(&self, query: &QueryParams) -> ClientResult<Vec<T>>;

    async fn create(&self, record: &T) -> ClientResult<T>;

    async fn update(&self, record: &T) -> ClientResult<T>;

    async fn soft_delete(&self, id: &T::Id) -> ClientResult<()>;

    async fn list_all(&self) -> ClientResult<Vec<T>> {
        self.list(&QueryParams::new()).await
    }
}

/// Shared handle to a resource client, as held by screens.
pub type SharedResource<T> = Arc<dyn ResourceApi<T>>;

/// Identifier of a record returned by the server, or `MissingId`.
pub fn assigned_id<T: Resource>(record: &T) -> ClientResult<T::Id> {
    record
        .id()
        .cloned()
        .ok_or(ClientError::MissingId(T::NAME))
}
