//! Screen-level error model.

use stockdesk_client::ClientError;
use stockdesk_core::DomainError;

use crate::form::FormError;
use crate::workflow::WorkflowError;

#[derive(Debug, thiserror::Error)]
pub enum ScreenError {
    #[error(transparent)]
    Invalid(#[from] DomainError),
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Workflow(#[from] WorkflowError),
}

impl From<FormError> for ScreenError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::Invalid(e) => ScreenError::Invalid(e),
            FormError::Client(e) => ScreenError::Client(e),
        }
    }
}

pub type ScreenResult<T> = Result<T, ScreenError>;
