//! Ordered model fallback over `POST {base}/models/{model}:generateContent`.

use std::time::Duration;

use serde_json::{json, Value};

/// Default upstream API root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model identifiers, tried in order.
pub const DEFAULT_MODELS: [&str; 3] = ["gemini-1.5-flash", "gemini-1.5-pro", "gemini-pro"];

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-goog-api-key";

/// Default timeout for a single upstream request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for chat relay failures.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// No API key is configured, so the relay is disabled.
    #[error("Chat relay is not configured")]
    NotConfigured,

    /// Every configured model failed; carries the last failure.
    #[error("All chat models failed; last error: {last_error}")]
    AllModelsFailed { last_error: String },

    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream returned a non-2xx status code.
    #[error("Chat API returned HTTP {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Upstream connection settings.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// API key; `None` disables the relay.
    pub api_key: Option<String>,
    /// API root without a trailing slash.
    pub base_url: String,
    /// Model identifiers, tried in order.
    pub models: Vec<String>,
    /// Timeout for each upstream request.
    pub timeout: Duration,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            models: DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Split a comma-separated model list, dropping blank items.
pub fn parse_models(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(String::from)
        .collect()
}

// ---------------------------------------------------------------------------
// ChatRelay
// ---------------------------------------------------------------------------

/// Forwards chat messages to the upstream API.
pub struct ChatRelay {
    client: reqwest::Client,
    config: ChatConfig,
}

impl ChatRelay {
    /// Create a relay with an HTTP client bounded by the configured timeout.
    pub fn new(config: ChatConfig) -> Result<Self, ChatError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Whether an API key is configured.
    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Send `message` to each model in order and return the first 2xx body.
    pub async fn relay(&self, message: &str) -> Result<Value, ChatError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(ChatError::NotConfigured);
        };

        let payload = request_body(message);
        let mut last_error = String::from("no models configured");

        for model in &self.config.models {
            match self.try_model(model, api_key, &payload).await {
                Ok(body) => {
                    tracing::debug!(model, "Chat relay succeeded");
                    return Ok(body);
                }
                Err(e) => {
                    tracing::warn!(model, error = %e, "Chat model failed, trying next");
                    last_error = format!("{model}: {e}");
                }
            }
        }

        tracing::error!(last_error = %last_error, "All chat models failed");
        Err(ChatError::AllModelsFailed { last_error })
    }

    /// Execute a single request against one model and check the status.
    ///
    /// The key travels in a header and request errors are stripped of their
    /// URL, so neither error text nor logs ever carry it.
    async fn try_model(
        &self,
        model: &str,
        api_key: &str,
        payload: &Value,
    ) -> Result<Value, ChatError> {
        let response = self
            .client
            .post(model_url(&self.config.base_url, model))
            .header(API_KEY_HEADER, api_key)
            .json(payload)
            .send()
            .await
            .map_err(redact)?;
        if !response.status().is_success() {
            return Err(ChatError::HttpStatus(response.status().as_u16()));
        }
        response.json::<Value>().await.map_err(redact)
    }
}

fn redact(err: reqwest::Error) -> ChatError {
    ChatError::Request(err.without_url())
}

fn model_url(base_url: &str, model: &str) -> String {
    format!("{}/models/{model}:generateContent", base_url.trim_end_matches('/'))
}

fn request_body(message: &str) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": message }] }]
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
