mod api;
mod get;
mod post;

pub use api::*;
pub use get::*;
pub use post::*;

use actix_web::{http::StatusCode, HttpResponse};
use askama::Template;

use crate::{
    content::{ContactInfo, CONTACT_INFO},
    domain::{
        CompanyName, ContactName, IntakeForm, ProjectMessage, ServiceInterest, SubmissionState,
        View,
    },
    layout::{render, Layout},
};

/// Flash message carried from a successful POST to the next GET.
const SENT_MESSAGE: &str = "Message Sent!";

struct ServiceOption {
    value: &'static str,
    label: &'static str,
    selected: bool,
}

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactPage<'a> {
    layout: Layout,
    info: &'static [ContactInfo],
    success: bool,
    submit_disabled: bool,
    error: Option<&'a str>,
    form: &'a IntakeForm,
    services: Vec<ServiceOption>,
    /// `maxlength` mirrors the server limits; the browser counts UTF-16
    /// units, never fewer than graphemes.
    max_name: usize,
    max_company: usize,
    max_message: usize,
}

/// Renders the view `state` maps to. `invalid` is a validation error from
/// before any submission was attempted.
fn render_contact(
    status: StatusCode,
    form: &IntakeForm,
    state: &SubmissionState,
    invalid: Option<&str>,
) -> Result<HttpResponse, actix_web::Error> {
    let services = ServiceInterest::ALL
        .into_iter()
        .map(|service| ServiceOption {
            value: service.as_str(),
            label: service.label(),
            selected: service.as_str() == form.service,
        })
        .collect();

    render(
        status,
        &ContactPage {
            layout: Layout::new("Contact", "/contact"),
            info: CONTACT_INFO,
            success: state.view() == View::Success,
            submit_disabled: state.submit_disabled(),
            error: invalid.or(state.error()),
            form,
            services,
            max_name: ContactName::MAX_GRAPHEMES,
            max_company: CompanyName::MAX_GRAPHEMES,
            max_message: ProjectMessage::MAX_GRAPHEMES,
        },
    )
}
