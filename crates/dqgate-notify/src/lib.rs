//! # dqgate-notify — Webhook Alert Delivery
//!
//! Best-effort delivery of data-quality alerts to an HTTP endpoint
//! accepting a `{"text": <string>}` JSON payload (Slack-compatible
//! incoming webhooks).
//!
//! ## Error Handling
//!
//! Transport failures, non-2xx responses, and client construction
//! problems are all surfaced as [`NotifyError`] with the endpoint kept in
//! the diagnostic context. The *caller* decides what a failure means; for
//! a validation run it must never change the outcome.
//!
//! ## Timeout
//!
//! The underlying client carries a bounded per-request timeout so a send
//! can never hang a run indefinitely. There is no retry: delivery is
//! fire-and-forget.
//!
//! ## Configuration
//!
//! The webhook address is always passed in explicitly via
//! [`WebhookConfig`]; this crate never reads the process environment.

use std::time::Duration;

use serde_json::json;
use thiserror::Error;

/// Default per-request timeout for webhook delivery, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors from webhook delivery.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The HTTP client could not be constructed.
    #[error("failed to build webhook client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport-level failure (connection refused, timeout, DNS).
    #[error("webhook request to {endpoint} failed: {source}")]
    Http {
        /// The webhook URL that was targeted.
        endpoint: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-2xx status.
    #[error("webhook {endpoint} returned {status}: {body}")]
    Rejected {
        /// The webhook URL that was targeted.
        endpoint: String,
        /// HTTP status code of the response.
        status: u16,
        /// Response body excerpt for diagnostics.
        body: String,
    },

    /// No async runtime could be set up for the blocking wrapper.
    #[error("failed to start delivery runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Configuration for the webhook channel.
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// Webhook endpoint URL.
    pub url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl WebhookConfig {
    /// Create a configuration with the default timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Webhook client wrapping a `reqwest::Client` with a bounded timeout.
#[derive(Debug)]
pub struct Notifier {
    client: reqwest::Client,
    url: String,
}

impl Notifier {
    /// Build a notifier from configuration.
    pub fn new(config: &WebhookConfig) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(NotifyError::Client)?;
        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    /// Post `{"text": <text>}` to the configured endpoint.
    pub async fn send(&self, text: &str) -> Result<(), NotifyError> {
        let resp = self
            .client
            .post(&self.url)
            .json(&json!({ "text": text }))
            .send()
            .await
            .map_err(|source| NotifyError::Http {
                endpoint: self.url.clone(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(NotifyError::Rejected {
                endpoint: self.url.clone(),
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(endpoint = %self.url, "webhook alert delivered");
        Ok(())
    }
}

/// Deliver an alert from synchronous code.
///
/// Spins up a current-thread runtime for the single send. Intended for
/// callers whose run loop is fully synchronous (the CLI); must not be
/// invoked from within an async context.
pub fn send_blocking(config: &WebhookConfig, text: &str) -> Result<(), NotifyError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(NotifyError::Runtime)?;
    let notifier = Notifier::new(config)?;
    runtime.block_on(notifier.send(text))
}
