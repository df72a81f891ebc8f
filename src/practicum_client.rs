//! Client for the Practicum review-status API.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::WatchError;

/// Thin wrapper over the review-status endpoint.
///
/// One GET per call, no retries; the watch loop owns the retry cadence.
#[derive(Debug, Clone)]
pub struct PracticumClient {
    http: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(endpoint: String, token: String, timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent("homework-bot/1.0")
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            endpoint,
            token,
        }
    }

    /// Fetch every status change since `from_date` (epoch seconds).
    ///
    /// Returns the decoded payload as-is; shape validation is the caller's
    /// job (`verdict::check_response`).
    pub async fn homework_statuses(&self, from_date: i64) -> Result<Value, WatchError> {
        debug!("GET {} from_date={}", self.endpoint, from_date);

        let resp = self
            .http
            .get(&self.endpoint)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(WatchError::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(WatchError::BadStatus(status));
        }

        resp.json::<Value>().await.map_err(WatchError::Decode)
    }
}
