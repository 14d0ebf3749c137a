mod about;
mod assets;
mod case_studies;
mod contact;
mod home;
mod pricing;
mod services;
mod testimonials;

pub use about::*;
pub use assets::*;
pub use case_studies::*;
pub use contact::*;
pub use home::*;
pub use pricing::*;
pub use services::*;
pub use testimonials::*;

use actix_web::{http::StatusCode, HttpRequest, HttpResponse, Responder};
use askama::Template;

use crate::layout::{render, Layout};

pub async fn health_check() -> impl Responder {
    HttpResponse::Ok()
}

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundPage<'a> {
    layout: Layout,
    path: &'a str,
}

pub async fn not_found(request: HttpRequest) -> Result<HttpResponse, actix_web::Error> {
    tracing::info!("no page at `{}`.", request.path());
    render(
        StatusCode::NOT_FOUND,
        &NotFoundPage {
            layout: Layout::new("Page Not Found", request.path()),
            path: request.path(),
        },
    )
}
