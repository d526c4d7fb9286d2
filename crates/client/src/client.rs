//! HTTP-backed age signals manager.
//!
//! Renders the vendor factory boundary as a JSON-over-HTTP client: one
//! `POST {base}/v1/age-signals:check` per request, empty body, optional-field
//! response. Typed vendor failures arrive as a JSON error body carrying
//! `errorCode` and `message`.
//!
//! # Example
//!
//! ```ignore
//! use age_signals_client::{AgeSignalsManager, AgeSignalsRequest, HttpAgeSignalsManager, HttpManagerConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = HttpManagerConfig::new("https://agesignals.example.com");
//!     let manager = HttpAgeSignalsManager::new(config)?;
//!
//!     let result = manager.check_age_signals(AgeSignalsRequest::new()).await?;
//!     println!("user status: {:?}", result.user_status());
//!
//!     Ok(())
//! }
//! ```

use crate::error::{AgeSignalsError, Result};
use crate::manager::AgeSignalsManager;
use crate::types::{AgeSignalsRequest, AgeSignalsResult};
use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;

/// Path of the signals check endpoint, relative to the configured base URL.
pub const CHECK_PATH: &str = "/v1/age-signals:check";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for the HTTP manager.
#[derive(Debug, Clone)]
pub struct HttpManagerConfig {
    /// Base URL of the vendor service.
    pub base_url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for HttpManagerConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: 30,
        }
    }
}

impl HttpManagerConfig {
    /// Creates a configuration for the given service base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// Raw signals response from the vendor service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSignalsResponse {
    user_status: Option<i32>,
    age_lower: Option<i32>,
    age_upper: Option<i32>,
    /// Epoch milliseconds.
    most_recent_approval_date: Option<i64>,
    install_id: Option<String>,
}

impl From<RawSignalsResponse> for AgeSignalsResult {
    fn from(raw: RawSignalsResponse) -> Self {
        let mut builder = AgeSignalsResult::builder();

        if let Some(status) = raw.user_status {
            builder = builder.user_status(status);
        }
        if let Some(age) = raw.age_lower {
            builder = builder.age_lower(age);
        }
        if let Some(age) = raw.age_upper {
            builder = builder.age_upper(age);
        }
        if let Some(date) = raw
            .most_recent_approval_date
            .and_then(DateTime::from_timestamp_millis)
        {
            builder = builder.most_recent_approval_date(date);
        }
        if let Some(id) = raw.install_id {
            builder = builder.install_id(id);
        }

        builder.build()
    }
}

/// Raw error body from the vendor service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawApiError {
    error_code: Option<i32>,
    message: Option<String>,
}

// =============================================================================
// HttpAgeSignalsManager
// =============================================================================

/// Age signals manager backed by the vendor's HTTP service.
pub struct HttpAgeSignalsManager {
    /// Configuration.
    config: HttpManagerConfig,

    /// HTTP client.
    http: Client,
}

impl std::fmt::Debug for HttpAgeSignalsManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpAgeSignalsManager")
            .field("base_url", &self.config.base_url)
            .field("timeout_secs", &self.config.timeout_secs)
            .finish_non_exhaustive()
    }
}

impl HttpAgeSignalsManager {
    /// Creates a manager with the given configuration.
    ///
    /// # Errors
    /// Returns an error if the base URL is empty or the HTTP client cannot be
    /// built.
    pub fn new(config: HttpManagerConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(AgeSignalsError::Configuration(
                "base URL cannot be empty".to_string(),
            ));
        }

        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                AgeSignalsError::Configuration(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self { config, http })
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Handles a service response, converting errors appropriately.
    async fn handle_response(&self, response: reqwest::Response) -> Result<AgeSignalsResult> {
        let status = response.status();

        if status.is_success() {
            let raw: RawSignalsResponse = response.json().await.map_err(|e| {
                AgeSignalsError::UnexpectedResponse(format!("malformed response body: {e}"))
            })?;
            return Ok(raw.into());
        }

        let text = response.text().await.unwrap_or_default();
        match serde_json::from_str::<RawApiError>(&text) {
            Ok(RawApiError {
                error_code: Some(code),
                message,
            }) => Err(AgeSignalsError::api(code, message.unwrap_or_default())),
            _ => Err(AgeSignalsError::UnexpectedResponse(format!(
                "HTTP {status}: {text}"
            ))),
        }
    }
}

#[async_trait]
impl AgeSignalsManager for HttpAgeSignalsManager {
    async fn check_age_signals(&self, _request: AgeSignalsRequest) -> Result<AgeSignalsResult> {
        let url = format!("{}{}", self.config.base_url, CHECK_PATH);

        tracing::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .body("{}")
            .send()
            .await?;

        self.handle_response(response).await
    }
}
