//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod classifier;
mod logging;
mod model;
mod output;
mod providers;
mod repl;

pub use classifier::FileClassifierConfig;
pub use logging::FileLoggingConfig;
pub use model::FileModelConfig;
pub use output::FileOutputConfig;
pub use providers::{FileGeminiConfig, FileProvidersConfig};
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};
use solar_domain::ConfigIssue;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model selection
    pub model: FileModelConfig,
    /// Provider settings (Gemini endpoint and credentials)
    pub providers: FileProvidersConfig,
    /// Relevance classifier settings
    pub classifier: FileClassifierConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Transcript log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Issues with `Severity::Error` must stop startup; warnings are
    /// reported and ignored.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.model.parse_model().1);
        issues.extend(self.providers.gemini.validate());
        issues
    }
}
