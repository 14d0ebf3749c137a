pub mod config;
mod content;
pub mod domain;
mod layout;
mod routes;
mod startup;
pub mod telemetry;
mod util;
pub mod webhook_client;

pub use startup::run;
