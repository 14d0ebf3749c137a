//! Static site copy. Everything here is data; the only behavior is the
//! pricing toggle and the case study filter.

mod about;
mod case_studies;
mod contact;
mod home;
mod pricing;
mod services;
mod site;
mod testimonials;

pub use about::{Milestone, TeamMember, Value, ABOUT_STATS, MILESTONES, TEAM, VALUES};
pub use case_studies::{CaseStudy, Category, CASE_STUDIES};
pub use contact::{ContactInfo, CONTACT_INFO};
pub use home::{Feature, Stat, FEATURES, STATS, TRUSTED_BY};
pub use pricing::{BillingCycle, Faq, Plan, FAQS, PLANS};
pub use services::{ProcessStep, Service, PROCESS, SERVICES};
pub use site::{FooterColumn, FOOTER_COLUMNS, NAV_LINKS, SITE_EMAIL, SITE_NAME, SITE_PHONE};
pub use testimonials::{ResultFigure, Testimonial, RESULTS, TESTIMONIALS};
