use std::net::TcpListener;

use actix_web::{cookie::Key, dev::Server, web, App, HttpServer};
use actix_web_flash_messages::{storage::CookieMessageStore, FlashMessagesFramework};
use anyhow::Context;
use secrecy::{ExposeSecret, SecretString};
use tracing_actix_web::TracingLogger;

use crate::{routes, webhook_client::WebhookClient};

/// `actix_web::cookie::Key` needs this much key material.
const MIN_SECRET_BYTES: usize = 64;

pub fn run(
    listener: TcpListener,
    webhook_client: web::Data<WebhookClient>,
    hmac_secret: SecretString,
) -> Result<Server, anyhow::Error> {
    let secret = hmac_secret.expose_secret().as_bytes();
    if secret.len() < MIN_SECRET_BYTES {
        anyhow::bail!("web.hmac_secret must be at least {MIN_SECRET_BYTES} bytes.");
    }
    let message_store = CookieMessageStore::builder(Key::from(secret)).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(TracingLogger::default())
            .app_data(web::JsonConfig::default().error_handler(routes::json_error_handler))
            .app_data(
                web::FormConfig::default()
                    .limit(routes::FORM_LIMIT_BYTES)
                    .error_handler(routes::form_error_handler),
            )
            .app_data(webhook_client.clone())
            .route("/", web::get().to(routes::home))
            .route("/services", web::get().to(routes::services))
            .route("/pricing", web::get().to(routes::pricing))
            .route("/case-studies", web::get().to(routes::case_studies))
            .route("/about", web::get().to(routes::about))
            .route("/testimonials", web::get().to(routes::testimonials))
            .route("/contact", web::get().to(routes::contact_form))
            .route("/contact", web::post().to(routes::submit_contact))
            .route("/api/contact", web::post().to(routes::submit_contact_json))
            .route("/health_check", web::get().to(routes::health_check))
            .route("/static/site.css", web::get().to(routes::stylesheet))
            .default_service(web::route().to(routes::not_found))
    })
    .listen(listener)
    .context("failed to listen on web port.")?
    .run();

    Ok(server)
}
