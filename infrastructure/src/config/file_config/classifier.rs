//! Classifier configuration from TOML (`[classifier]` section)

use serde::{Deserialize, Serialize};
use solar_domain::MatchMode;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClassifierConfig {
    /// Keyword matching strategy ("token" or "phrase")
    pub match_mode: MatchMode,
}
