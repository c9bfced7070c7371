//! `stockdesk-core`: record primitives shared by every resource family.
//!
//! This crate contains **pure** building blocks (no IO, no HTTP): identifiers,
//! the domain error, lifecycle status, and the contracts that the resource
//! client and the list views are written against.

pub mod error;
pub mod id;
pub mod lifecycle;
pub mod query;
pub mod resource;
pub mod wire;

pub use error::{DomainError, DomainResult};
pub use id::RecordKey;
pub use lifecycle::StatusType;
pub use query::{ListFilter, QueryParams};
pub use resource::Resource;
