use std::net::TcpListener;

use actix_web::web;
use anyhow::Context;
use boldflow::{telemetry, webhook_client::WebhookClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = telemetry::get_subscriber("boldflow", "info", std::io::stdout);
    telemetry::init_subscriber(subscriber);

    let config = boldflow::config::try_config().context("failed to load configuration.")?;
    let address = config.web.server_address();
    let listener =
        TcpListener::bind(&address).with_context(|| format!("failed to bind {address}."))?;
    let webhook_client = web::Data::new(WebhookClient::from_config(&config)?);

    tracing::info!("serving on http://{address}");
    boldflow::run(listener, webhook_client, config.web.hmac_secret)?.await?;

    Ok(())
}
