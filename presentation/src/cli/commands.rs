//! CLI command definitions

use clap::Parser;
use solar_domain::MatchMode;
use std::path::PathBuf;

/// CLI arguments for solar-assistant
#[derive(Parser, Debug)]
#[command(name = "solar-assistant")]
#[command(author, version, about = "Solar AI Assistant - a Gemini chat limited to solar energy")]
#[command(long_about = r#"
Solar AI Assistant answers questions about solar energy using a Gemini model.
Messages that are not about solar energy are politely refused without
contacting the model.

The API key is read from GEMINI_API_KEY (a local .env file is honored).

Configuration files are loaded from (in priority order):
1. --config <path>                 Explicit config file
2. ./solar-assistant.toml          Project-level config
3. ~/.config/solar-assistant/config.toml   Global config

Example:
  solar-assistant
  solar-assistant "What is the payback period of a 5 kW solar panel system?"
  solar-assistant -m gemini-2.0-flash --match-mode phrase
"#)]
pub struct Cli {
    /// Ask a single question and exit (omit to start the chat)
    pub question: Option<String>,

    /// Gemini model to use
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Keyword matching strategy: token or phrase
    #[arg(long, value_name = "MODE")]
    pub match_mode: Option<MatchMode>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_chat_defaults() {
        let cli = Cli::try_parse_from(["solar-assistant"]).unwrap();
        assert!(cli.question.is_none());
        assert!(cli.model.is_none());
        assert!(cli.match_mode.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_parse_single_shot_with_flags() {
        let cli = Cli::try_parse_from([
            "solar-assistant",
            "-vv",
            "--match-mode",
            "phrase",
            "-m",
            "gemini-2.0-flash",
            "What is net metering?",
        ])
        .unwrap();
        assert_eq!(cli.question.as_deref(), Some("What is net metering?"));
        assert_eq!(cli.model.as_deref(), Some("gemini-2.0-flash"));
        assert_eq!(cli.match_mode, Some(MatchMode::Phrase));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_invalid_match_mode_is_rejected() {
        assert!(Cli::try_parse_from(["solar-assistant", "--match-mode", "fuzzy"]).is_err());
    }
}
