//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior.

use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl OutputConfig {
    /// Apply the color setting to the process-wide `colored` switch.
    pub fn apply(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show progress indicators
    pub show_progress: bool,
    /// Path to history file; `~/` is expanded
    pub history_file: Option<String>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

impl ReplConfig {
    /// Where input history is persisted.
    ///
    /// Defaults to `<data dir>/solar-assistant/history.txt`.
    pub fn history_path(&self) -> Option<PathBuf> {
        match &self.history_file {
            Some(file) => match file.strip_prefix("~/") {
                Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
                None => Some(PathBuf::from(file)),
            },
            None => dirs::data_dir().map(|p| p.join("solar-assistant").join("history.txt")),
        }
    }
}
