use std::{fmt::Debug, time::Duration};

use anyhow::Context;
use reqwest::StatusCode;

use crate::{domain::IntakeRecord, util::error_chain_fmt};

/// Shown when the webhook answers with a non-2xx status.
pub const REJECTED_MESSAGE: &str = "Failed to send message. Please try again.";
/// Shown when the webhook could not be reached at all.
pub const FALLBACK_MESSAGE: &str = "Something went wrong. Please try again or email us directly.";

#[derive(Debug)]
pub struct WebhookClient {
    client: reqwest::Client,
    url: reqwest::Url,
}

impl WebhookClient {
    pub fn new(url: &str, timeout: Option<Duration>) -> Result<Self, anyhow::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("failed to build webhook client.")?;
        let url = reqwest::Url::parse(url)
            .with_context(|| format!("failed to parse webhook url `{url}`."))?;

        Ok(Self { client, url })
    }

    pub fn from_config(config: &crate::config::Config) -> Result<Self, anyhow::Error> {
        Self::new(&config.webhook.url, config.webhook.timeout())
    }

    /// One POST, no retries. Only the status code of the reply is used.
    #[tracing::instrument(
        name = "delivering intake record",
        skip_all,
        fields(
            service = %record.service.as_str(),
            has_company = !record.company.is_empty(),
        )
    )]
    pub async fn deliver(&self, record: &IntakeRecord) -> Result<(), SubmissionError> {
        let body = IntakeRequestBody {
            name: record.name.as_ref(),
            email: record.email.as_ref(),
            company: record.company.as_ref(),
            service: record.service.as_str(),
            message: record.message.as_ref(),
        };

        let response = self
            .client
            .post(self.url.clone())
            .json(&body)
            .send()
            .await
            .map_err(SubmissionError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionError::Rejected(status));
        }

        Ok(())
    }
}

#[derive(serde::Serialize)]
struct IntakeRequestBody<'a> {
    name: &'a str,
    email: &'a str,
    company: &'a str,
    service: &'a str,
    message: &'a str,
}

#[derive(thiserror::Error)]
pub enum SubmissionError {
    #[error("webhook rejected the submission with status {0}.")]
    Rejected(StatusCode),
    #[error("failed to reach the webhook.")]
    Transport(#[source] reqwest::Error),
}

impl SubmissionError {
    /// Text for the inline error on the contact form.
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmissionError::Rejected(_) => REJECTED_MESSAGE,
            // reqwest messages carry the webhook url, keep them in the logs
            SubmissionError::Transport(_) => FALLBACK_MESSAGE,
        }
    }
}

impl Debug for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
