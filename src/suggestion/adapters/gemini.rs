//! `reqwest` client for the Gemini `generateContent` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::suggestion::{
    domain::{GenerateContentRequest, GenerateContentResponse},
    ports::{GenerationClient, GenerationError, GenerationResult},
};

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model name.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-lite";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for [`GeminiClient`].
#[derive(Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    /// API key. `None` leaves the client unconfigured.
    pub api_key: Option<String>,
    /// API base URL without trailing slash.
    pub base_url: String,
    /// Model name.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GeminiConfig {
    /// Sets the API key. Blank keys count as missing.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let key = api_key.into();
        self.api_key = (!key.trim().is_empty()).then_some(key);
        self
    }

    /// Sets the model name.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Returns the endpoint URL without the key parameter.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Gemini client over HTTPS.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    http: reqwest::Client,
}

impl GeminiClient {
    /// Creates a client.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Transport`] when the HTTP client cannot be
    /// built.
    pub fn new(config: GeminiConfig) -> GenerationResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| GenerationError::Transport(err.to_string()))?;
        Ok(Self { config, http })
    }

    /// Returns the client settings.
    #[must_use]
    pub const fn config(&self) -> &GeminiConfig {
        &self.config
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> GenerationResult<GenerateContentResponse> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GenerationError::NotConfigured)?;

        debug!(model = %self.config.model, "sending generateContent request");
        let response = self
            .http
            .post(self.config.endpoint())
            .query(&[("key", api_key)])
            .json(request)
            .send()
            .await
            .map_err(|err| GenerationError::Transport(err.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), %body, "generation provider rejected request");
            return Err(GenerationError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|err| GenerationError::Decode(err.without_url().to_string()))
    }

    fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }
}
