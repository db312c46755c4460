use crate::{
    domain::contact::{
        errors::ContactError, models::submission::ContactRequest, ports::ContactService,
    },
    inbound::http::{errors::AppError, SharedContactState},
};
use actix_web::{web, HttpResponse};

pub const MESSAGE_SENT: &str = "Message sent successfully! I'll get back to you soon.";

/// Body of every `/api/contact` response, successful or not.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

impl ContactResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[tracing::instrument(
    name = "Relaying a contact form submission",
    skip(contact_request, state),
    fields(
        submitter_email = %contact_request.email,
        submitter_name = %contact_request.name,
    )
)]
pub async fn contact<CS: ContactService>(
    contact_request: web::Json<ContactRequest>,
    state: web::Data<SharedContactState<CS>>,
) -> Result<HttpResponse, AppError> {
    let contact_request = contact_request.into_inner();
    if let Err(error) = state.contact_service().submit(contact_request).await {
        if let ContactError::DeliveryError { stage, source } = &error {
            tracing::error!(
                %stage,
                error.cause_chain = ?source,
                "Failed to relay a contact form submission",
            );
        }
        return Err(error.into());
    }

    Ok(HttpResponse::Ok().json(ContactResponse::success(MESSAGE_SENT)))
}
