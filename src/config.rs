use std::time::Duration;

use secrecy::SecretString;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Config {
    pub web: WebConfig,
    pub webhook: WebhookConfig,
}

#[derive(serde::Deserialize, Clone)]
pub struct WebConfig {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    /// flash message cookie signing key, at least 64 bytes
    pub hmac_secret: SecretString,
}

impl WebConfig {
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct WebhookConfig {
    pub url: String,
    /// unset means the HTTP client default applies
    #[serde(default)]
    pub timeout_milliseconds: Option<u64>,
}

impl WebhookConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_milliseconds.map(Duration::from_millis)
    }
}

/// Loads `config.yaml` from the working directory, then applies
/// `APP_`-prefixed environment overrides, e.g. `APP_WEBHOOK__URL`.
pub fn try_config() -> Result<Config, config::ConfigError> {
    config::Config::builder()
        .add_source(config::File::new("config.yaml", config::FileFormat::Yaml))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize::<Config>()
}

pub fn config() -> Config {
    try_config().expect("failed to read config.yaml.")
}
