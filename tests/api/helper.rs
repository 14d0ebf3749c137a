use std::net::TcpListener;

use actix_web::web;
use boldflow::{config::Config, telemetry, webhook_client::WebhookClient};
use once_cell::sync::Lazy;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Set `TEST_LOG=true` to see the bunyan logs of the app under test.
static TRACING: Lazy<()> = Lazy::new(|| {
    let name = "test";
    let env_filter = "info";
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = telemetry::get_subscriber(name, env_filter, std::io::stdout);
        telemetry::init_subscriber(subscriber);
    } else {
        let subscriber = telemetry::get_subscriber(name, env_filter, std::io::sink);
        telemetry::init_subscriber(subscriber);
    }
});

pub const WEBHOOK_PATH: &str = "/webhook/contact";

pub struct TestApp {
    pub address: String,
    pub webhook_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn get_html(&self, route: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}{route}", &self.address))
            .send()
            .await
            .expect("failed to execute request.")
    }

    pub async fn get_contact_html(&self) -> String {
        self.get_html("/contact").await.text().await.unwrap()
    }

    pub async fn post_contact<Body: serde::Serialize>(&self, body: &Body) -> reqwest::Response {
        let body = serde_urlencoded::to_string(body).expect("failed to encode form.");
        self.api_client
            .post(format!("{}/contact", &self.address))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .expect("failed to execute request.")
    }

    pub async fn post_contact_json(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}/api/contact", &self.address))
            .json(body)
            .send()
            .await
            .expect("failed to execute request.")
    }

    /// The webhook answers every delivery with `status`, exactly `times` times.
    pub async fn mock_webhook(&self, status: u16, times: u64) {
        Mock::given(path(WEBHOOK_PATH))
            .and(method("POST"))
            .respond_with(ResponseTemplate::new(status))
            .expect(times)
            .mount(&self.webhook_server)
            .await;
    }

    pub async fn webhook_bodies(&self) -> Vec<serde_json::Value> {
        self.webhook_server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|request| serde_json::from_slice(&request.body).unwrap())
            .collect()
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

/// Starts the app against a mock webhook; `configure` may point it elsewhere.
pub async fn spawn_app_with(configure: impl FnOnce(&mut Config)) -> TestApp {
    Lazy::force(&TRACING);

    let webhook_server = MockServer::start().await;
    let mut config = boldflow::config::config();
    config.web.port = 0;
    config.webhook.url = format!("{}{WEBHOOK_PATH}", webhook_server.uri());
    configure(&mut config);

    let listener = TcpListener::bind(config.web.server_address()).expect("failed to bind web port.");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://{}:{port}", &config.web.host);

    let webhook_client = web::Data::new(
        WebhookClient::from_config(&config).expect("failed to build webhook client."),
    );
    let server = boldflow::run(listener, webhook_client, config.web.hmac_secret)
        .expect("failed to build server.");
    tokio::spawn(server);

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .cookie_store(true)
        .build()
        .unwrap();

    TestApp {
        address,
        webhook_server,
        api_client,
    }
}

pub fn assert_is_redirect_to(response: &reqwest::Response, location: &str) {
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers().get("Location").unwrap(), location);
}
