use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use askama::Template;

use crate::{
    content::{FooterColumn, FOOTER_COLUMNS, NAV_LINKS, SITE_EMAIL, SITE_NAME, SITE_PHONE},
    util::e500,
};

pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Fields read by `templates/base.html`; every page template carries one.
pub struct Layout {
    pub title: &'static str,
    pub site_name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub nav: Vec<NavItem>,
    pub footer: &'static [FooterColumn],
}

impl Layout {
    pub fn new(title: &'static str, path: &str) -> Self {
        let nav = NAV_LINKS
            .iter()
            .map(|link| NavItem {
                href: link.href,
                label: link.label,
                active: link.is_active(path),
            })
            .collect();

        Self {
            title,
            site_name: SITE_NAME,
            email: SITE_EMAIL,
            phone: SITE_PHONE,
            nav,
            footer: FOOTER_COLUMNS,
        }
    }
}

pub fn render(status: StatusCode, page: &impl Template) -> Result<HttpResponse, actix_web::Error> {
    let body = page.render().map_err(e500)?;

    Ok(HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body))
}
