//! Gemini LLM Gateway implementation

use crate::gemini::protocol::GenerationConfig;
use crate::gemini::session::GeminiChatSession;
use async_trait::async_trait;
use solar_application::{GatewayError, LlmGateway, LlmSession};
use solar_domain::Model;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Default endpoint of the Gemini REST API
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Connection settings shared by every conversation of a gateway
#[derive(Clone)]
pub struct GeminiSettings {
    pub api_key: String,
    pub base_url: String,
    /// Transport-level timeout; `None` waits as long as the transport does.
    pub timeout: Option<Duration>,
    pub generation: GenerationConfig,
}

impl GeminiSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            generation: GenerationConfig::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_generation(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }

    /// URL of the `generateContent` endpoint for `model`
    pub fn generate_url(&self, model: &Model) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }
}

impl std::fmt::Debug for GeminiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiSettings")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("generation", &self.generation)
            .finish()
    }
}

/// LLM Gateway implementation for the Gemini REST API
pub struct GeminiLlmGateway {
    client: reqwest::Client,
    settings: Arc<GeminiSettings>,
}

impl GeminiLlmGateway {
    /// Create a new gateway with its own HTTP client
    pub fn new(settings: GeminiSettings) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        info!(base_url = %settings.base_url, "GeminiLlmGateway initialized");

        Ok(Self {
            client,
            settings: Arc::new(settings),
        })
    }
}

#[async_trait]
impl LlmGateway for GeminiLlmGateway {
    async fn create_session(&self, model: &Model) -> Result<Box<dyn LlmSession>, GatewayError> {
        let session = GeminiChatSession::new(
            self.client.clone(),
            Arc::clone(&self.settings),
            model.clone(),
        );
        Ok(Box::new(session))
    }
}
