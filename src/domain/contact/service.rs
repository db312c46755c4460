use async_trait::async_trait;
use std::sync::Arc;

use super::{
    errors::{ContactError, DeliveryStage},
    models::{
        notifications::{owner_notification, submitter_acknowledgment},
        owner::OwnerProfile,
        submission::{ContactRequest, Submission},
    },
    ports::{ContactNotifier, ContactService},
};

#[derive(Debug)]
pub struct Contact<N>
where
    N: ContactNotifier,
{
    pub notifier: Arc<N>,
    pub owner: OwnerProfile,
}

impl<N> Contact<N>
where
    N: ContactNotifier,
{
    pub fn new(notifier: Arc<N>, owner: OwnerProfile) -> Self {
        Self { notifier, owner }
    }

    #[tracing::instrument(name = "Notify the site owner", skip(self, submission))]
    async fn notify_owner(&self, submission: &Submission) -> Result<(), ContactError> {
        let stage = DeliveryStage::OwnerNotification;
        let email = owner_notification(submission, &self.owner, chrono::Utc::now())
            .map_err(|e| ContactError::delivery(stage, e))?;
        self.notifier
            .send_email(&email)
            .await
            .map_err(|e| ContactError::delivery(stage, e))
    }

    #[tracing::instrument(name = "Acknowledge the submitter", skip(self, submission))]
    async fn acknowledge_submitter(&self, submission: &Submission) -> Result<(), ContactError> {
        let stage = DeliveryStage::SubmitterAcknowledgment;
        let email = submitter_acknowledgment(submission, &self.owner)
            .map_err(|e| ContactError::delivery(stage, e))?;
        self.notifier
            .send_email(&email)
            .await
            .map_err(|e| ContactError::delivery(stage, e))
    }
}

#[async_trait]
impl<N> ContactService for Contact<N>
where
    N: ContactNotifier,
{
    async fn submit(&self, req: ContactRequest) -> Result<(), ContactError> {
        let submission = Submission::try_from(req)?;

        // The acknowledgment is only attempted once the owner has been told.
        // A failure on either one is reported the same way to the caller.
        self.notify_owner(&submission).await?;
        self.acknowledge_submitter(&submission).await?;

        tracing::info!("Contact form submission relayed");
        Ok(())
    }
}
