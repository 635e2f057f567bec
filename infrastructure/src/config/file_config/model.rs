//! Model configuration from TOML (`[model]` section)

use serde::{Deserialize, Serialize};
use solar_domain::{ConfigIssue, ConfigIssueCode, Model};

/// Raw model configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Gemini model identifier (e.g. "gemini-1.5-pro")
    pub name: String,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            name: Model::default().to_string(),
        }
    }
}

impl FileModelConfig {
    /// Parse the configured model, falling back to the default on error.
    pub fn parse_model(&self) -> (Model, Vec<ConfigIssue>) {
        let name = self.name.trim();
        if name.is_empty() {
            return (
                Model::default(),
                vec![ConfigIssue::error(
                    ConfigIssueCode::EmptyModelName {
                        field: "model.name".to_string(),
                    },
                    "model.name: model name cannot be empty",
                )],
            );
        }

        let Ok(model) = name.parse::<Model>();
        let mut issues = Vec::new();
        if !model.is_known() {
            let known: Vec<String> = Model::known_models().iter().map(Model::to_string).collect();
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::UnknownModel {
                    model: name.to_string(),
                },
                format!(
                    "model.name: '{}' is not a known Gemini model (known: {})",
                    name,
                    known.join(", ")
                ),
            ));
        }
        (model, issues)
    }
}
