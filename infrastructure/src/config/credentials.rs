//! Startup configuration errors and API key resolution

use super::file_config::FileGeminiConfig;
use solar_domain::ConfigIssue;
use thiserror::Error;

/// Faults that stop the process before any interaction is served
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Gemini API key not found: set the {env_var} environment variable (or add it to .env)")]
    MissingApiKey { env_var: String },

    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid configuration:\n{0}")]
    Invalid(String),
}

impl ConfigError {
    /// Build an `Invalid` error from the fatal issues, if any.
    pub fn from_issues(issues: &[ConfigIssue]) -> Option<Self> {
        let errors: Vec<&str> = issues
            .iter()
            .filter(|i| i.is_error())
            .map(|i| i.message.as_str())
            .collect();
        if errors.is_empty() {
            None
        } else {
            Some(ConfigError::Invalid(format!("  - {}", errors.join("\n  - "))))
        }
    }
}

/// Resolve the Gemini API key.
///
/// The environment variable named by `api_key_env` wins; the direct
/// `api_key` setting is the fallback. Blank values count as missing.
pub fn resolve_api_key(config: &FileGeminiConfig) -> Result<String, ConfigError> {
    let from_env = std::env::var(&config.api_key_env)
        .ok()
        .filter(|v| !v.trim().is_empty());

    from_env
        .or_else(|| {
            config
                .api_key
                .clone()
                .filter(|v| !v.trim().is_empty())
        })
        .ok_or_else(|| ConfigError::MissingApiKey {
            env_var: config.api_key_env.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use solar_domain::ConfigIssueCode;

    fn config_with_env(env: &str) -> FileGeminiConfig {
        FileGeminiConfig {
            api_key_env: env.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_key_from_environment() {
        Jail::expect_with(|jail| {
            jail.set_env("SOLAR_TEST_KEY_A", "abc123");
            let key = resolve_api_key(&config_with_env("SOLAR_TEST_KEY_A"))
                .map_err(|e| e.to_string())?;
            assert_eq!(key, "abc123");
            Ok(())
        });
    }

    #[test]
    fn test_environment_wins_over_direct_key() {
        Jail::expect_with(|jail| {
            jail.set_env("SOLAR_TEST_KEY_B", "from-env");
            let config = FileGeminiConfig {
                api_key: Some("from-file".to_string()),
                ..config_with_env("SOLAR_TEST_KEY_B")
            };
            assert_eq!(resolve_api_key(&config).map_err(|e| e.to_string())?, "from-env");
            Ok(())
        });
    }

    #[test]
    fn test_direct_key_fallback() {
        let config = FileGeminiConfig {
            api_key: Some("from-file".to_string()),
            ..config_with_env("SOLAR_TEST_KEY_UNSET_C")
        };
        assert_eq!(resolve_api_key(&config).unwrap(), "from-file");
    }

    #[test]
    fn test_empty_key_is_missing() {
        Jail::expect_with(|jail| {
            jail.set_env("SOLAR_TEST_KEY_D", "");
            let err = resolve_api_key(&config_with_env("SOLAR_TEST_KEY_D")).unwrap_err();
            assert!(
                matches!(&err, ConfigError::MissingApiKey { env_var } if env_var == "SOLAR_TEST_KEY_D")
            );
            assert!(err.to_string().contains("SOLAR_TEST_KEY_D"));
            Ok(())
        });
    }

    #[test]
    fn test_from_issues_ignores_warnings() {
        let warning = ConfigIssue::warning(
            ConfigIssueCode::UnknownModel {
                model: "gemini-exp".to_string(),
            },
            "unknown model",
        );
        assert!(ConfigError::from_issues(std::slice::from_ref(&warning)).is_none());

        let error = ConfigIssue::error(
            ConfigIssueCode::EmptyModelName {
                field: "model.name".to_string(),
            },
            "model.name: model name cannot be empty",
        );
        let err = ConfigError::from_issues(&[warning, error]).unwrap();
        assert!(err.to_string().contains("model.name: model name cannot be empty"));
        assert!(!err.to_string().contains("unknown model"));
    }
}
