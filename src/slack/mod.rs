//! Slack incoming-webhook client.
use reqwest::{Client, Url};
use std::fmt;
use thiserror::Error;
use tracing::{info, warn};

pub mod block;

pub use block::Message;

#[derive(Debug, Error)]
pub enum SlackError {
    #[error("invalid webhook URL: {0}")]
    InvalidUrl(String),
    #[error("failed to reach Slack: {0}")]
    Http(#[from] reqwest::Error),
    #[error("slack webhook error {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

#[derive(Clone)]
pub struct SlackClient {
    http: Client,
    webhook_url: Url,
}

// Webhook URLs are credentials; Debug shows the host only.
impl fmt::Debug for SlackClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlackClient")
            .field("host", &self.webhook_url.host_str())
            .finish_non_exhaustive()
    }
}

impl SlackClient {
    pub fn new(webhook_url: &str) -> Result<Self, SlackError> {
        let webhook_url =
            Url::parse(webhook_url).map_err(|e| SlackError::InvalidUrl(e.to_string()))?;
        let http = Client::builder()
            .user_agent("gha-slack-notify/0.1")
            .build()
            .expect("reqwest client");
        Ok(Self { http, webhook_url })
    }

    pub fn build_request(&self, message: &Message) -> Result<reqwest::Request, SlackError> {
        Ok(self
            .http
            .post(self.webhook_url.clone())
            .header("Content-Type", "application/json")
            .json(message)
            .build()?)
    }

    /// Serialize and POST the message. One attempt; returns the raw response
    /// body on 2xx, the status and body otherwise.
    pub async fn send(&self, message: &Message) -> Result<String, SlackError> {
        let request = self.build_request(message)?;
        info!(host = ?self.webhook_url.host_str(), "posting message to Slack webhook");

        let res = self.http.execute(request).await?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            warn!(%status, body, "slack webhook rejected message");
            return Err(SlackError::Status { status, body });
        }

        let body = res.text().await?;
        info!(%status, "slack webhook accepted message");
        Ok(body)
    }
}
