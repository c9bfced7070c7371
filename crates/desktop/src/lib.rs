//! `stockdesk-desktop`
//!
//! **Responsibility:** screen state for the inventory back office.
//!
//! This crate provides:
//! - `FormController`: create/edit form state machine
//! - `ListView`: filter-reactive, active-only record lists
//! - `TransactionWorkflow`: item → inventory → transaction creation chain
//! - one screen per record family, and the `stockdesk` CLI on top
//!
//! Screens are a thin shell around the REST collaborator, which stays the
//! single source of truth; nothing is cached between refreshes.

pub mod cli;
pub mod config;
pub mod error;
pub mod form;
pub mod list_view;
pub mod screens;
pub mod workflow;

pub use config::AppConfig;
pub use error::ScreenError;
pub use form::{FormController, FormError, FormMode, FormModel};
pub use list_view::{ListView, ViewState};
pub use workflow::{
    Compensation, CreatedRecords, TransactionInput, TransactionWorkflow, WorkflowError,
    WorkflowReceipt, WorkflowStep,
};
