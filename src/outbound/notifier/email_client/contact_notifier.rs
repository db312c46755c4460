use async_trait::async_trait;

use super::*;
use crate::domain::contact::models::email::OutgoingEmail;
use crate::domain::contact::ports::{ContactNotifier, ContactNotifierError};

#[async_trait]
impl ContactNotifier for EmailClient {
    #[tracing::instrument(
        name = "Send an email through the delivery provider",
        skip(self, email),
        fields(
            recipients = email.recipients.len(),
            subject = %email.message.subject_as_ref().as_ref(),
        )
    )]
    async fn send_email(&self, email: &OutgoingEmail) -> Result<(), ContactNotifierError> {
        let from = self.from_header(&email.sender_name);
        let message = &email.message;
        let request_body = SendEmailRequest {
            from: &from,
            to: email.recipients.iter().map(|r| r.as_ref()).collect(),
            subject: message.subject_as_ref().as_ref(),
            html: message.html_as_ref().as_ref(),
            text: message.text_as_ref().as_ref(),
        };
        self.post_email(request_body)
            .await
            .map_err(ContactNotifierError::Unexpected)
    }
}
