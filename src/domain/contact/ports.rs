use async_trait::async_trait;

use super::{
    errors::ContactError,
    models::{
        email::{EmailError, OutgoingEmail},
        submission::ContactRequest,
    },
};

#[async_trait]
pub trait ContactService: Send + Sync + 'static {
    /// Validates a contact form request and relays it to the owner and back
    /// to the submitter.
    async fn submit(&self, req: ContactRequest) -> Result<(), ContactError>;
}

#[async_trait]
///  Delivers a single email through whatever provider backs it
pub trait ContactNotifier: Send + Sync + 'static {
    async fn send_email(&self, email: &OutgoingEmail) -> Result<(), ContactNotifierError>;
}

#[derive(thiserror::Error, Debug)]
pub enum ContactNotifierError {
    #[error("Validation error: {0}")]
    InvalidEmailMessage(#[from] EmailError),

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}
