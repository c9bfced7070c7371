//! HTTP implementation of [`ResourceApi`] over `reqwest`.

use std::marker::PhantomData;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use stockdesk_core::{QueryParams, Resource};

use crate::api::{ClientError, ClientResult, ResourceApi, assigned_id};

/// Client for one json-server style collection at `{base_url}/{T::PATH}`.
pub struct HttpResource<T> {
    http: reqwest::Client,
    base_url: String,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for HttpResource<T> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            _record: PhantomData,
        }
    }
}

impl<T: Resource> HttpResource<T> {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            _record: PhantomData,
        }
    }

    pub fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, T::PATH)
    }

    pub fn record_url(&self, id: &T::Id) -> String {
        format!("{}/{}/{}", self.base_url, T::PATH, id)
    }

    /// Map non-success statuses to errors; 404 on a record URL is `NotFound`.
    async fn check(resp: reqwest::Response, id: Option<&T::Id>) -> ClientResult<reqwest::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        if status == StatusCode::NOT_FOUND {
            if let Some(id) = id {
                return Err(ClientError::not_found::<T>(id));
            }
        }
        Err(ClientError::Api {
            resource: T::NAME,
            status: status.as_u16(),
            body: resp.text().await.unwrap_or_default(),
        })
    }

    async fn decode<R: DeserializeOwned>(resp: reqwest::Response) -> ClientResult<R> {
        resp.json::<R>()
            .await
            .map_err(|e| ClientError::Parse(format!("{} response: {e}", T::NAME)))
    }
}

/// One listed row; rows that do not decode are logged and dropped so the
/// rest of the collection stays visible.
fn decode_row<T: Resource>(row: JsonValue) -> Option<T> {
    let id = row.get("id").map(ToString::to_string);
    match serde_json::from_value(row) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!(resource = T::NAME, id = ?id, error = %e, "skipping malformed row");
            None
        }
    }
}

fn network(e: reqwest::Error) -> ClientError {
    ClientError::Network(e.to_string())
}

#[async_trait]
impl<T: Resource> ResourceApi<T> for HttpResource<T> {
    async fn list(&self, query: &QueryParams) -> ClientResult<Vec<T>> {
        let url = self.collection_url();
        tracing::debug!(resource = T::NAME, %url, params = ?query.pairs(), "listing");

        let resp = self
            .http
            .get(&url)
            .query(query.pairs())
            .send()
            .await
            .map_err(network)?;
        let resp = Self::check(resp, None).await?;
        let rows: Vec<JsonValue> = Self::decode(resp).await?;
        Ok(rows.into_iter().filter_map(decode_row::<T>).collect())
    }

    async fn create(&self, record: &T) -> ClientResult<T> {
        let url = self.collection_url();
        let body = record.without_id();

        let resp = self.http.post(&url).json(&body).send().await.map_err(network)?;
        let resp = Self::check(resp, None).await?;
        let created: T = Self::decode(resp).await?;

        let id = assigned_id(&created)?;
        tracing::info!(resource = T::NAME, %id, "created");
        Ok(created)
    }

    async fn update(&self, record: &T) -> ClientResult<T> {
        let id = record.id().ok_or(ClientError::MissingId(T::NAME))?;
        let url = self.record_url(id);

        let resp = self.http.put(&url).json(record).send().await.map_err(network)?;
        let resp = Self::check(resp, Some(id)).await?;
        let updated: T = Self::decode(resp).await?;

        tracing::info!(resource = T::NAME, %id, "updated");
        Ok(updated)
    }

    async fn soft_delete(&self, id: &T::Id) -> ClientResult<()> {
        let url = self.record_url(id);

        let resp = self
            .http
            .patch(&url)
            .json(&T::soft_delete_patch())
            .send()
            .await
            .map_err(network)?;
        Self::check(resp, Some(id)).await?;

        tracing::info!(resource = T::NAME, %id, "soft-deleted");
        Ok(())
    }
}
