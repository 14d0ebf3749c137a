use std::fmt::Debug;

use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
    web, HttpRequest, HttpResponse, ResponseError,
};
use anyhow::Context;

use crate::{
    domain::{IntakeForm, IntakeRecord, SubmissionState},
    util::error_chain_fmt,
    webhook_client::{SubmissionError, WebhookClient, FALLBACK_MESSAGE},
};

/// JSON flavour of the contact form for script clients.
/// Replies with the resulting `SubmissionState`.
#[tracing::instrument(
    name = "Submitting contact request",
    skip(body, webhook_client),
    fields(
        email_domain = %body.email_domain(),
        service = %body.service,
    )
)]
pub async fn submit_contact_json(
    body: web::Json<IntakeForm>,
    webhook_client: web::Data<WebhookClient>,
) -> Result<HttpResponse, ContactError> {
    let record = IntakeRecord::try_from(&body.0).map_err(ContactError::ValidationError)?;

    let mut state = SubmissionState::default();
    state.submit().context("failed to start submission.")?;
    webhook_client.deliver(&record).await?;
    state.succeed().context("failed to complete submission.")?;

    tracing::info!("contact request delivered.");
    Ok(HttpResponse::Ok().json(state))
}

/// Malformed JSON gets the same reply shape as an invalid record.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let reply = SubmissionState::Failed(format!("Invalid request body: {err}"));
    InternalError::from_response(err, HttpResponse::BadRequest().json(reply)).into()
}

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("{0}")]
    ValidationError(String),
    #[error(transparent)]
    DeliveryError(#[from] SubmissionError),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl ContactError {
    fn user_message(&self) -> String {
        match self {
            ContactError::ValidationError(reason) => reason.clone(),
            ContactError::DeliveryError(e) => e.user_message().into(),
            ContactError::UnexpectedError(_) => FALLBACK_MESSAGE.into(),
        }
    }
}

impl Debug for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ContactError::DeliveryError(_) => StatusCode::BAD_GATEWAY,
            ContactError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        tracing::error!(error.cause_chain = ?self, "contact request failed.");
        HttpResponse::build(self.status_code()).json(SubmissionState::Failed(self.user_message()))
    }
}
