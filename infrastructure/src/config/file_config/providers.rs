//! Provider configuration from TOML (`[providers]` section)

use crate::gemini::gateway::GeminiSettings;
use crate::gemini::protocol::GenerationConfig;
use serde::{Deserialize, Serialize};
use solar_domain::{ConfigIssue, ConfigIssueCode};
use std::time::Duration;

/// Gemini API provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Environment variable name for the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the Gemini REST API.
    pub base_url: String,
    /// Transport timeout in seconds; unset means no timeout.
    pub timeout_seconds: Option<u64>,
    /// Sampling temperature (0.0 ..= 2.0).
    pub temperature: Option<f32>,
    /// Maximum tokens per reply.
    pub max_output_tokens: Option<u32>,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout_seconds: None,
            temperature: None,
            max_output_tokens: None,
        }
    }
}

impl FileGeminiConfig {
    /// Convert to gateway settings with an already resolved API key.
    pub fn to_settings(&self, api_key: impl Into<String>) -> GeminiSettings {
        GeminiSettings::new(api_key)
            .with_base_url(self.base_url.clone())
            .with_timeout(self.timeout_seconds.map(Duration::from_secs))
            .with_generation(GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            })
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidUrl {
                    field: "providers.gemini.base_url".to_string(),
                    value: self.base_url.clone(),
                },
                format!(
                    "providers.gemini.base_url: '{}' must start with http:// or https://",
                    self.base_url
                ),
            ));
        }

        if let Some(t) = self.temperature
            && !(0.0..=2.0).contains(&t)
        {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "providers.gemini.temperature".to_string(),
                    detail: format!("{} is not within 0.0..=2.0", t),
                },
                format!("providers.gemini.temperature: {} is not within 0.0..=2.0", t),
            ));
        }

        if self.timeout_seconds == Some(0) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "providers.gemini.timeout_seconds".to_string(),
                    detail: "must be greater than 0".to_string(),
                },
                "providers.gemini.timeout_seconds cannot be 0",
            ));
        }

        if self.max_output_tokens == Some(0) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "providers.gemini.max_output_tokens".to_string(),
                    detail: "must be greater than 0".to_string(),
                },
                "providers.gemini.max_output_tokens cannot be 0",
            ));
        }

        issues
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// Gemini API settings.
    pub gemini: FileGeminiConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_timeout_is_rejected() {
        let config = FileGeminiConfig {
            timeout_seconds: Some(0),
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("timeout_seconds"));
    }

    #[test]
    fn test_to_settings() {
        let config = FileGeminiConfig {
            timeout_seconds: Some(20),
            temperature: Some(0.2),
            ..Default::default()
        };
        let settings = config.to_settings("key");
        assert_eq!(settings.api_key, "key");
        assert_eq!(settings.base_url, crate::gemini::gateway::DEFAULT_BASE_URL);
        assert_eq!(settings.timeout, Some(Duration::from_secs(20)));
        assert_eq!(settings.generation.temperature, Some(0.2));
        assert!(settings.generation.max_output_tokens.is_none());
    }

    #[test]
    fn test_boundary_temperature_is_accepted() {
        let config = FileGeminiConfig {
            temperature: Some(2.0),
            ..Default::default()
        };
        assert!(config.validate().is_empty());
    }
}
