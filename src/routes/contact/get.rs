use actix_web::{http::StatusCode, HttpResponse};
use actix_web_flash_messages::{IncomingFlashMessages, Level};

use super::{render_contact, SENT_MESSAGE};
use crate::domain::{IntakeForm, SubmissionState};

/// The form, or the success view right after a delivery.
/// Fields always start empty: every visit is a fresh record.
pub async fn contact_form(
    flash_messages: IncomingFlashMessages,
) -> Result<HttpResponse, actix_web::Error> {
    let delivered = flash_messages
        .iter()
        .any(|m| m.level() == Level::Success && m.content() == SENT_MESSAGE);
    let state = if delivered {
        SubmissionState::Succeeded
    } else {
        SubmissionState::Idle
    };

    render_contact(StatusCode::OK, &IntakeForm::default(), &state, None)
}
