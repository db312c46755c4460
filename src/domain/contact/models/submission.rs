use serde_aux::field_attributes::deserialize_default_from_null;

use super::{
    email::{EmailAddress, EmailError},
    message::{ContactMessage, ContactMessageError},
    name::{SubmitterName, SubmitterNameError},
};

/// Contact form payload as it travels over the wire. Missing and `null`
/// fields both arrive as empty strings so they fail the same check.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ContactRequest {
    #[serde(default, deserialize_with = "deserialize_default_from_null")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_default_from_null")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_default_from_null")]
    pub message: String,
}

impl ContactRequest {
    pub fn new(name: &str, email: &str, message: &str) -> ContactRequest {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    fn has_blank_field(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .any(|field| field.trim().is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct Submission {
    pub name: SubmitterName,
    pub email: EmailAddress,
    pub message: ContactMessage,
}

#[derive(thiserror::Error, Debug)]
pub enum SubmissionError {
    #[error("All fields are required")]
    MissingFields,
    #[error("Invalid email format")]
    InvalidEmail(#[source] EmailError),
}

impl From<SubmitterNameError> for SubmissionError {
    fn from(_: SubmitterNameError) -> Self {
        Self::MissingFields
    }
}

impl From<ContactMessageError> for SubmissionError {
    fn from(_: ContactMessageError) -> Self {
        Self::MissingFields
    }
}

impl From<EmailError> for SubmissionError {
    fn from(error: EmailError) -> Self {
        Self::InvalidEmail(error)
    }
}

impl Submission {
    /// Presence of every field is checked before the email shape, so an
    /// empty email is reported as missing rather than malformed.
    pub fn new(req: ContactRequest) -> Result<Submission, SubmissionError> {
        if req.has_blank_field() {
            return Err(SubmissionError::MissingFields);
        }
        Ok(Self {
            name: SubmitterName::parse(req.name)?,
            email: EmailAddress::parse(req.email)?,
            message: ContactMessage::parse(req.message)?,
        })
    }
}

impl TryFrom<ContactRequest> for Submission {
    type Error = SubmissionError;
    fn try_from(request: ContactRequest) -> Result<Self, Self::Error> {
        Submission::new(request)
    }
}
