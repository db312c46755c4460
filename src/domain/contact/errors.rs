use super::{models::submission::SubmissionError, ports::ContactNotifierError};

/// Which of the two emails a delivery failure happened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStage {
    OwnerNotification,
    SubmitterAcknowledgment,
}

impl std::fmt::Display for DeliveryStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryStage::OwnerNotification => write!(f, "owner notification"),
            DeliveryStage::SubmitterAcknowledgment => write!(f, "submitter acknowledgment"),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ContactError {
    #[error(transparent)]
    ValidationError(#[from] SubmissionError),
    #[error("Failed to deliver the {stage}")]
    DeliveryError {
        stage: DeliveryStage,
        #[source]
        source: ContactNotifierError,
    },
}

impl ContactError {
    pub fn delivery(stage: DeliveryStage, source: impl Into<ContactNotifierError>) -> Self {
        Self::DeliveryError {
            stage,
            source: source.into(),
        }
    }
}
