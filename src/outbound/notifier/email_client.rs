use crate::configuration::EmailClientSettings;
use crate::domain::contact::models::email::EmailAddress;
use anyhow::Context;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

mod contact_notifier;

/// Client for the Resend HTTP API.
#[derive(Debug, Clone)]
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender: EmailAddress,
    authorization_token: Secret<String>,
}

impl EmailClient {
    pub fn new(configuration: EmailClientSettings) -> Result<Self, anyhow::Error> {
        let sender = configuration
            .sender()
            .context("Invalid sender email address")?;
        let timeout = configuration.timeout();

        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build the email HTTP client")?;
        Ok(Self {
            http_client,
            base_url: configuration.base_url,
            sender,
            authorization_token: configuration.authorization_token,
        })
    }

    fn from_header(&self, sender_name: &str) -> String {
        format!("{} <{}>", sender_name, self.sender)
    }

    async fn post_email<'a>(
        &'a self,
        email_request_body: SendEmailRequest<'a>,
    ) -> Result<(), anyhow::Error> {
        let url = format!("{}/emails", self.base_url);
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(self.authorization_token.expose_secret())
            .json(&email_request_body)
            .send()
            .await
            .map_err(anyhow::Error::from)?
            .error_for_status()
            .map_err(anyhow::Error::from)?;

        match response.json::<SendEmailResponse>().await {
            Ok(body) => tracing::info!(email_id = %body.id, "Email accepted by provider"),
            Err(_) => tracing::debug!("Email accepted by provider without an id"),
        }
        Ok(())
    }
}

#[derive(serde::Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

#[derive(serde::Deserialize)]
struct SendEmailResponse {
    id: String,
}
