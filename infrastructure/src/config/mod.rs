//! Configuration file loading for solar-assistant
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SOLAR_ASSISTANT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./solar-assistant.toml` or `./.solar-assistant.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/solar-assistant/config.toml`
//! 5. Default values

mod credentials;
mod file_config;
mod loader;

pub use credentials::{ConfigError, resolve_api_key};
pub use file_config::{
    FileClassifierConfig, FileConfig, FileGeminiConfig, FileLoggingConfig, FileModelConfig,
    FileOutputConfig, FileProvidersConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
