use actix_web::{http::StatusCode, HttpResponse};
use askama::Template;

use crate::{
    content::{ResultFigure, Testimonial, RESULTS, TESTIMONIALS},
    layout::{render, Layout},
};

#[derive(Template)]
#[template(path = "testimonials.html")]
struct TestimonialsPage {
    layout: Layout,
    featured: Vec<&'static Testimonial>,
    testimonials: Vec<&'static Testimonial>,
    results: &'static [ResultFigure],
}

pub async fn testimonials() -> Result<HttpResponse, actix_web::Error> {
    let (featured, testimonials): (Vec<_>, Vec<_>) =
        TESTIMONIALS.iter().partition(|t| t.featured);

    render(
        StatusCode::OK,
        &TestimonialsPage {
            layout: Layout::new("Testimonials", "/testimonials"),
            featured,
            testimonials,
            results: RESULTS,
        },
    )
}
