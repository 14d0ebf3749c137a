use actix_web::{http::StatusCode, HttpResponse};
use askama::Template;

use crate::{
    content::{Milestone, Stat, TeamMember, Value, ABOUT_STATS, MILESTONES, TEAM, VALUES},
    layout::{render, Layout},
};

#[derive(Template)]
#[template(path = "about.html")]
struct AboutPage {
    layout: Layout,
    stats: &'static [Stat],
    values: &'static [Value],
    team: &'static [TeamMember],
    milestones: &'static [Milestone],
}

pub async fn about() -> Result<HttpResponse, actix_web::Error> {
    render(
        StatusCode::OK,
        &AboutPage {
            layout: Layout::new("About", "/about"),
            stats: ABOUT_STATS,
            values: VALUES,
            team: TEAM,
            milestones: MILESTONES,
        },
    )
}
