use actix_web::{http::StatusCode, HttpResponse};
use askama::Template;

use crate::{
    content::{ProcessStep, Service, PROCESS, SERVICES},
    layout::{render, Layout},
};

#[derive(Template)]
#[template(path = "services.html")]
struct ServicesPage {
    layout: Layout,
    services: &'static [Service],
    process: &'static [ProcessStep],
}

pub async fn services() -> Result<HttpResponse, actix_web::Error> {
    render(
        StatusCode::OK,
        &ServicesPage {
            layout: Layout::new("Services", "/services"),
            services: SERVICES,
            process: PROCESS,
        },
    )
}
