use actix_web::{http::StatusCode, HttpResponse};
use askama::Template;

use crate::{
    content::{Feature, Stat, FEATURES, STATS, TRUSTED_BY},
    layout::{render, Layout},
};

#[derive(Template)]
#[template(path = "home.html")]
struct HomePage {
    layout: Layout,
    features: &'static [Feature],
    stats: &'static [Stat],
    trusted_by: &'static [&'static str],
}

pub async fn home() -> Result<HttpResponse, actix_web::Error> {
    render(
        StatusCode::OK,
        &HomePage {
            layout: Layout::new("AI Automation Agency", "/"),
            features: FEATURES,
            stats: STATS,
            trusted_by: TRUSTED_BY,
        },
    )
}
