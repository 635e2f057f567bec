//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use crate::ProgressReporter;
use crate::chat::ReplCommand;
use crate::config::ReplConfig;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use solar_application::{
    ChatSession, LlmGateway, NoProgress, ProcessTurnUseCase, TurnNotifier, TurnOutcome,
};
use tracing::debug;

/// Interactive chat REPL
///
/// Owns the [`ChatSession`] of the single user at the terminal.
pub struct ChatRepl<G: LlmGateway + 'static> {
    use_case: ProcessTurnUseCase<G>,
    session: ChatSession,
    config: ReplConfig,
}

impl<G: LlmGateway + 'static> ChatRepl<G> {
    /// Create a new ChatRepl
    pub fn new(use_case: ProcessTurnUseCase<G>) -> Self {
        Self {
            use_case,
            session: ChatSession::new(),
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.config.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        println!(
            "{}",
            ConsoleFormatter::welcome(self.use_case.model(), self.use_case.classifier().mode())
        );

        loop {
            match rl.readline(">>> ") {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line.trim());

                    if self.handle_line(&line).await {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path
            && let Err(e) = rl.save_history(path)
        {
            debug!("Could not save input history to {}: {}", path.display(), e);
        }

        Ok(())
    }

    /// Dispatch one non-empty input line. Returns true if should exit.
    ///
    /// Known commands are handled here; every other line, even one that
    /// starts with `/`, is submitted as a message exactly as typed.
    async fn handle_line(&mut self, line: &str) -> bool {
        if let Some(command) = ReplCommand::parse(line) {
            return self.handle_command(command);
        }

        println!();
        self.process_message(line).await;
        println!();
        false
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => {
                println!();
                println!("{}", ConsoleFormatter::help());
            }
            ReplCommand::Clear => {
                self.use_case.clear(&mut self.session);
                println!("Chat cleared.");
            }
            ReplCommand::History => {
                println!();
                println!("{}", ConsoleFormatter::format_history(self.session.transcript()));
            }
            ReplCommand::Transcript => {
                println!();
                println!(
                    "{}",
                    ConsoleFormatter::format_transcript(self.session.transcript())
                );
                println!();
            }
        }
        false
    }

    /// Submit one message and print the reply.
    pub async fn process_message(&mut self, message: &str) -> TurnOutcome {
        let spinner;
        let progress: &dyn TurnNotifier = if self.config.show_progress {
            spinner = ProgressReporter::new();
            &spinner
        } else {
            &NoProgress
        };

        let outcome = self
            .use_case
            .execute_with_progress(&mut self.session, message, progress)
            .await;

        println!("{}", ConsoleFormatter::format_outcome(&outcome));
        outcome
    }
}
