use actix_web::{http::StatusCode, web, HttpResponse};
use askama::Template;

use crate::{
    content::{BillingCycle, Faq, Plan, FAQS, PLANS},
    layout::{render, Layout},
};

#[derive(serde::Deserialize)]
pub struct PricingQuery {
    billing: Option<String>,
}

/// A plan as shown for the selected billing cycle.
struct PlanView {
    name: &'static str,
    description: &'static str,
    price: String,
    custom: bool,
    features: &'static [&'static str],
    popular: bool,
    call_to_action: &'static str,
}

impl PlanView {
    fn new(plan: &'static Plan, cycle: BillingCycle) -> Self {
        Self {
            name: plan.name,
            description: plan.description,
            price: plan.price_label(cycle),
            custom: plan.price(cycle).is_none(),
            features: plan.features,
            popular: plan.popular,
            call_to_action: plan.call_to_action(),
        }
    }
}

#[derive(Template)]
#[template(path = "pricing.html")]
struct PricingPage {
    layout: Layout,
    yearly: bool,
    plans: Vec<PlanView>,
    faqs: &'static [Faq],
}

#[tracing::instrument(name = "Pricing page", skip_all, fields(billing = tracing::field::Empty))]
pub async fn pricing(query: web::Query<PricingQuery>) -> Result<HttpResponse, actix_web::Error> {
    let cycle = BillingCycle::parse(query.billing.as_deref());
    tracing::Span::current().record("billing", cycle.as_str());

    render(
        StatusCode::OK,
        &PricingPage {
            layout: Layout::new("Pricing", "/pricing"),
            yearly: cycle == BillingCycle::Yearly,
            plans: PLANS.iter().map(|plan| PlanView::new(plan, cycle)).collect(),
            faqs: FAQS,
        },
    )
}
