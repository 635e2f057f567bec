//! Gemini conversation handle.
//!
//! Provides [`GeminiChatSession`] which implements [`LlmSession`].
//! `generateContent` is stateless, so the session keeps the dialogue
//! locally and sends all of it with every request.

use crate::gemini::error::{GeminiError, Result};
use crate::gemini::gateway::GeminiSettings;
use crate::gemini::protocol::{self, GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use solar_application::{GatewayError, LlmSession};
use solar_domain::{Message, Model, truncate};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// An ongoing conversation with one Gemini model.
pub struct GeminiChatSession {
    client: reqwest::Client,
    settings: Arc<GeminiSettings>,
    id: String,
    model: Model,
    /// Completed exchanges only; a failed call leaves it untouched.
    history: Mutex<Vec<Message>>,
}

impl GeminiChatSession {
    pub fn new(client: reqwest::Client, settings: Arc<GeminiSettings>, model: Model) -> Self {
        Self {
            client,
            settings,
            id: uuid::Uuid::new_v4().to_string(),
            model,
            history: Mutex::new(Vec::new()),
        }
    }

    /// Number of messages the model has seen so far
    pub async fn history_len(&self) -> usize {
        self.history.lock().await.len()
    }

    /// Sends the next user message and waits for the complete reply.
    pub async fn ask(&self, content: &str, system_instruction: &str) -> Result<String> {
        let mut history = self.history.lock().await;

        let request = GenerateContentRequest::new(&history, content, system_instruction)
            .with_generation_config(self.settings.generation.clone());
        let url = self.settings.generate_url(&self.model);
        let started = Instant::now();

        debug!(
            session = %self.id,
            model = %self.model,
            messages = request.contents.len(),
            "POST {}", url
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.settings.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = protocol::error_message(&body);
            debug!(%status, body = %truncate(&body, 300), "Gemini error body");
            return Err(GeminiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::Decode(e.to_string()))?;
        let text = parsed.into_text()?;

        history.push(Message::user(content));
        history.push(Message::assistant(text.clone()));

        info!(
            session = %self.id,
            model = %self.model,
            latency_ms = started.elapsed().as_millis() as u64,
            "generateContent completed"
        );

        Ok(text)
    }
}

#[async_trait]
impl LlmSession for GeminiChatSession {
    fn id(&self) -> &str {
        &self.id
    }

    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(
        &self,
        content: &str,
        system_instruction: &str,
    ) -> std::result::Result<String, GatewayError> {
        self.ask(content, system_instruction)
            .await
            .map_err(GatewayError::from)
    }
}
