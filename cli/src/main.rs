//! CLI entrypoint for Solar Assistant
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use solar_application::{
    ChatSession, ConversationLogger, NoConversationLogger, NoProgress, ProcessTurnUseCase,
    TurnNotifier,
};
use solar_domain::{Model, RelevanceClassifier};
use solar_infrastructure::{
    ConfigError, ConfigLoader, FileConfig, GeminiLlmGateway, JsonlConversationLogger,
    resolve_api_key,
};
use solar_presentation::{
    ChatRepl, Cli, ConsoleFormatter, OutputConfig, ProgressReporter, ReplConfig,
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // A missing .env file is fine; the key may come from the real environment.
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging based on verbosity level; RUST_LOG wins when set
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match &dotenv {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("Could not read .env file: {}", e),
    }

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    let issues = file_config.validate();
    for issue in issues.iter().filter(|i| !i.is_error()) {
        warn!("{}", issue.message);
    }
    if let Some(err) = ConfigError::from_issues(&issues) {
        return Err(err.into());
    }

    let model = select_model(&cli, &file_config)?;
    let match_mode = cli
        .match_mode
        .unwrap_or(file_config.classifier.match_mode);

    OutputConfig {
        color: file_config.output.color && !cli.no_color,
    }
    .apply();

    let api_key = resolve_api_key(&file_config.providers.gemini)?;

    info!("Starting Solar Assistant with {} ({} matching)", model, match_mode);

    // === Dependency Injection ===
    let gateway = Arc::new(GeminiLlmGateway::new(
        file_config.providers.gemini.to_settings(api_key),
    )?);

    let logger: Arc<dyn ConversationLogger> = match &file_config.logging.transcript_log {
        Some(path) => match JsonlConversationLogger::new(path) {
            Some(logger) => {
                info!("Writing transcript log to {}", logger.path().display());
                Arc::new(logger)
            }
            None => Arc::new(NoConversationLogger),
        },
        None => Arc::new(NoConversationLogger),
    };

    let use_case = ProcessTurnUseCase::new(gateway, model)
        .with_classifier(RelevanceClassifier::new(match_mode))
        .with_logger(logger);

    let show_progress = file_config.repl.show_progress && !cli.quiet;

    // Single question mode
    if let Some(question) = cli.question.as_deref() {
        let mut session = ChatSession::new();
        let spinner;
        let progress: &dyn TurnNotifier = if show_progress {
            spinner = ProgressReporter::new();
            &spinner
        } else {
            &NoProgress
        };

        let outcome = use_case
            .execute_with_progress(&mut session, question, progress)
            .await;
        println!("{}", ConsoleFormatter::format_outcome(&outcome));

        return Ok(if outcome.is_fault() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        });
    }

    // Chat mode
    let mut repl = ChatRepl::new(use_case).with_config(ReplConfig {
        show_progress,
        history_file: file_config.repl.history_file.clone(),
    });
    repl.run().await?;

    Ok(ExitCode::SUCCESS)
}

/// `--model` wins over the `[model]` section.
fn select_model(cli: &Cli, file_config: &FileConfig) -> Result<Model> {
    let Some(name) = cli.model.as_deref() else {
        return Ok(file_config.model.parse_model().0);
    };

    let name = name.trim();
    if name.is_empty() {
        bail!("--model cannot be empty");
    }

    let Ok(model) = name.parse::<Model>();
    if !model.is_known() {
        let known: Vec<String> = Model::known_models().iter().map(Model::to_string).collect();
        warn!(
            "'{}' is not a known Gemini model (known: {}); sending it as-is",
            model,
            known.join(", ")
        );
    }
    Ok(model)
}
