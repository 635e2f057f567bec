//! Wire types for the Gemini `generateContent` endpoint.

use crate::gemini::error::{GeminiError, Result};
use serde::{Deserialize, Serialize};
use solar_domain::{Message, Role};

/// Request body for `models/{model}:generateContent`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Build a request from the dialogue so far plus the next user message.
    pub fn new(history: &[Message], next: &str, system_instruction: &str) -> Self {
        let mut contents: Vec<Content> = history.iter().map(Content::from).collect();
        contents.push(Content::from(&Message::user(next)));

        let system_instruction = if system_instruction.is_empty() {
            None
        } else {
            Some(Content {
                role: None,
                parts: vec![Part::text(system_instruction)],
            })
        };

        Self {
            contents,
            system_instruction,
            generation_config: None,
        }
    }

    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        if !config.is_empty() {
            self.generation_config = Some(config);
        }
        self
    }
}

/// A turn of the dialogue ("user" or "model")
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<&'static str>,
    pub parts: Vec<Part>,
}

impl From<&Message> for Content {
    fn from(message: &Message) -> Self {
        let role = match message.role {
            Role::User => "user",
            Role::Assistant => "model",
        };
        Self {
            role: Some(role),
            parts: vec![Part::text(&message.content)],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Optional sampling parameters
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl GenerationConfig {
    pub fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.max_output_tokens.is_none()
    }
}

/// Response body of `generateContent`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate.
    pub fn into_text(self) -> Result<String> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(GeminiError::Blocked(reason));
        }

        let candidate = self
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| GeminiError::EmptyResponse("no candidates".to_string()))?;

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(GeminiError::EmptyResponse(
                candidate
                    .finish_reason
                    .unwrap_or_else(|| "unknown".to_string()),
            ));
        }

        Ok(text)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

/// Human-readable message from an error response body.
///
/// Uses the `{"error": {"status", "message"}}` envelope when present and
/// falls back to the raw body.
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorWrapper>(body) {
        Ok(wrapper) => {
            let message = wrapper.error.message.unwrap_or_else(|| body.to_string());
            match wrapper.error.status {
                Some(status) if !status.is_empty() => format!("{}: {}", status, message),
                _ => message,
            }
        }
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}
