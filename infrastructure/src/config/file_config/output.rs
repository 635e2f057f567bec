//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}
