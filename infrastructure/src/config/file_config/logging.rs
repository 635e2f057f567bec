//! Transcript log configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Path of a JSONL transcript log; disabled when unset
    pub transcript_log: Option<String>,
}
