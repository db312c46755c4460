//! Typed counterpart of the contact form on the home page.
//!
//! `ContactForm` keeps the field values and the status shown to the visitor,
//! `ContactFormClient` performs the single POST to `/api/contact`.

use crate::domain::contact::models::submission::ContactRequest;
use crate::inbound::http::ContactResponse;
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};

/// How long a success or error status stays visible before the form goes
/// back to idle.
pub const STATUS_DISPLAY_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

#[derive(thiserror::Error, Debug)]
pub enum FormClientError {
    #[error("Failed to reach the contact endpoint")]
    Transport(#[from] reqwest::Error),
    #[error("Contact endpoint answered with {status}")]
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },
}

impl FormClientError {
    pub fn server_message(&self) -> Option<&str> {
        match self {
            FormClientError::Transport(_) => None,
            FormClientError::Rejected { message, .. } => message.as_deref(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContactFormClient {
    http_client: Client,
    endpoint: String,
}

impl ContactFormClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: Client::new(),
            endpoint: format!("{}/api/contact", base_url.trim_end_matches('/')),
        }
    }

    /// Posts the fields as JSON. Only the status code decides the outcome,
    /// the body is read for its message when there is one.
    pub async fn send(&self, request: &ContactRequest) -> Result<String, FormClientError> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let message = response
            .json::<ContactResponse>()
            .await
            .ok()
            .map(|body| body.message);

        if status.is_success() {
            Ok(message.unwrap_or_default())
        } else {
            Err(FormClientError::Rejected { status, message })
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: ContactRequest,
    status: FormStatus,
    status_set_at: Option<Instant>,
    status_duration: Duration,
    last_message: Option<String>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: ContactRequest::default(),
            status: FormStatus::Idle,
            status_set_at: None,
            status_duration: STATUS_DISPLAY_DURATION,
            last_message: None,
        }
    }

    pub fn with_status_duration(self, status_duration: Duration) -> Self {
        Self {
            status_duration,
            ..self
        }
    }

    pub fn update(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.fields.name = value,
            FormField::Email => self.fields.email = value,
            FormField::Message => self.fields.message = value,
        }
    }

    pub fn fields(&self) -> &ContactRequest {
        &self.fields
    }

    /// Current status, falling back to `Idle` once the last outcome has been
    /// shown for long enough.
    pub fn status(&self) -> FormStatus {
        match self.status_set_at {
            Some(set_at) if set_at.elapsed() < self.status_duration => self.status,
            _ => FormStatus::Idle,
        }
    }

    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    /// Submits the current fields once. Holding `&mut self` for the whole
    /// call keeps a second submission from starting while this one runs.
    #[tracing::instrument(name = "Submitting the contact form", skip(self, client))]
    pub async fn submit(&mut self, client: &ContactFormClient) -> FormStatus {
        let status = match client.send(&self.fields).await {
            Ok(message) => {
                self.fields = ContactRequest::default();
                self.last_message = Some(message);
                FormStatus::Success
            }
            Err(error) => {
                tracing::warn!(error.cause_chain = ?error, "Contact form submission failed");
                self.last_message = error.server_message().map(str::to_string);
                FormStatus::Error
            }
        };
        self.status = status;
        self.status_set_at = Some(Instant::now());
        status
    }
}
