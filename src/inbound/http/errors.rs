use crate::domain::contact::errors::ContactError;
use crate::inbound::http::handlers::contact::ContactResponse;

use actix_web::HttpResponse;
use actix_web::{http::StatusCode, ResponseError};

pub const DELIVERY_FAILED_MESSAGE: &str =
    "Failed to send message. Please try again or email me directly.";
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl From<ContactError> for AppError {
    fn from(error: ContactError) -> Self {
        match error {
            ContactError::ValidationError(e) => AppError::ValidationError(e.to_string()),
            e @ ContactError::DeliveryError { .. } => AppError::Unexpected(anyhow::Error::from(e)),
        }
    }
}

impl AppError {
    fn public_message(&self) -> String {
        match self {
            AppError::ValidationError(message) => message.clone(),
            AppError::Unexpected(_) => DELIVERY_FAILED_MESSAGE.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        HttpResponse::build(self.status_code()).json(ContactResponse::failure(self.public_message()))
    }
}
