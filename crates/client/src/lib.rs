//! `stockdesk-client`
//!
//! **Responsibility:** talk to the REST collaborator.
//!
//! This crate provides:
//! - `ResourceApi<T>`: list / create / update / soft-delete for one record family
//! - `HttpResource<T>`: the `reqwest` implementation against a json-server style API
//! - `InMemoryResource<T>`: the same contract held in memory (tests, offline demo)
//! - `Backend`: the five resource families bundled for the screens
//! - `MemoryDb`: in-memory tables loaded from and saved to a json-server `db.json`
//!
//! Errors are surfaced unmodified: no retries, no swallowing.

pub mod api;
pub mod backend;
pub mod config;
pub mod http;
pub mod memory;
pub mod snapshot;

pub use api::{ClientError, ClientResult, ResourceApi, SharedResource, assigned_id};
pub use backend::Backend;
pub use config::{ClientConfig, ConfigError};
pub use http::HttpResource;
pub use memory::InMemoryResource;
pub use snapshot::MemoryDb;
