use actix_web::{http::StatusCode, web, HttpResponse};
use askama::Template;

use crate::{
    content::{CaseStudy, Category, CASE_STUDIES},
    layout::{render, Layout},
};

#[derive(serde::Deserialize)]
pub struct CaseStudyQuery {
    category: Option<String>,
}

struct Tab {
    href: String,
    label: &'static str,
    active: bool,
}

#[derive(Template)]
#[template(path = "case_studies.html")]
struct CaseStudiesPage {
    layout: Layout,
    tabs: Vec<Tab>,
    studies: Vec<&'static CaseStudy>,
}

pub async fn case_studies(
    query: web::Query<CaseStudyQuery>,
) -> Result<HttpResponse, actix_web::Error> {
    let selected = Category::parse(query.category.as_deref());
    let tabs = Category::TABS
        .into_iter()
        .map(|category| Tab {
            href: match category {
                Category::All => "/case-studies".to_string(),
                _ => format!("/case-studies?category={}", category.slug()),
            },
            label: category.label(),
            active: category == selected,
        })
        .collect();

    render(
        StatusCode::OK,
        &CaseStudiesPage {
            layout: Layout::new("Case Studies", "/case-studies"),
            tabs,
            studies: selected.filter(CASE_STUDIES),
        },
    )
}
