use actix_web::{
    error::{InternalError, UrlencodedError},
    http::StatusCode,
    web, HttpRequest, HttpResponse, ResponseError,
};
use actix_web_flash_messages::FlashMessage;

use super::{render_contact, SENT_MESSAGE};
use crate::{
    domain::{CompanyName, ContactName, IntakeForm, IntakeRecord, ProjectMessage, SubmissionState},
    util::{e500, see_other},
    webhook_client::WebhookClient,
};

#[tracing::instrument(
    name = "Submitting contact form",
    skip(form, webhook_client),
    fields(
        email_domain = %form.email_domain(),
        service = %form.service,
    )
)]
pub async fn submit_contact(
    form: web::Form<IntakeForm>,
    webhook_client: web::Data<WebhookClient>,
) -> Result<HttpResponse, actix_web::Error> {
    let form = form.into_inner();
    let mut state = SubmissionState::default();

    let record = match IntakeRecord::try_from(&form) {
        Ok(record) => record,
        Err(reason) => {
            tracing::warn!("invalid contact form: {reason}");
            return render_contact(StatusCode::BAD_REQUEST, &form, &state, Some(&reason));
        }
    };

    state.submit().map_err(e500)?;
    match webhook_client.deliver(&record).await {
        Ok(()) => {
            state.succeed().map_err(e500)?;
            tracing::info!("contact form delivered.");
            FlashMessage::success(SENT_MESSAGE).send();
            Ok(see_other("/contact"))
        }
        Err(e) => {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "contact form delivery failed."
            );
            state.fail(e.user_message()).map_err(e500)?;
            render_contact(StatusCode::BAD_GATEWAY, &form, &state, None)
        }
    }
}

/// Room for every field at its longest, with each UTF-16 unit
/// percent-encoded to 9 bytes, plus email, service and keys.
pub const FORM_LIMIT_BYTES: usize =
    (ContactName::MAX_GRAPHEMES + CompanyName::MAX_GRAPHEMES + ProjectMessage::MAX_GRAPHEMES)
        * 9
        + 4 * 1024;

/// An unreadable form body gets the contact page back with an inline
/// error instead of actix's plain-text reply.
pub fn form_error_handler(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    let status = err.status_code();
    let reason = match &err {
        UrlencodedError::Overflow { .. } => {
            "Your message is too long. Please shorten it and try again."
        }
        _ => "We could not read your message. Please try again.",
    };
    tracing::warn!(error.message = %err, "unreadable contact form.");

    match render_contact(status, &IntakeForm::default(), &SubmissionState::Idle, Some(reason)) {
        Ok(response) => InternalError::from_response(err, response).into(),
        Err(e) => e,
    }
}
