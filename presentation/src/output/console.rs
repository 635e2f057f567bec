//! Console output formatter for chat turns

use colored::Colorize;
use solar_application::TurnOutcome;
use solar_domain::{MatchMode, Model, Transcript, preview};

/// Window title and banner heading
pub const TITLE: &str = "Solar AI Assistant";

/// Shown by the history panel when nothing has been asked yet
pub const EMPTY_HISTORY_MESSAGE: &str = "No previous chat history available.";

/// Characters of the user message kept in a history preview
const PREVIEW_CHARS: usize = 50;

/// Formats chat output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Welcome banner printed when the chat starts
    pub fn welcome(model: &Model, match_mode: MatchMode) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str("╭─────────────────────────────────────────────╮\n");
        output.push_str(&format!("│{:^45}│\n", TITLE));
        output.push_str("╰─────────────────────────────────────────────╯\n");
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Model:".cyan().bold(), model));
        output.push_str(&format!("{} {}\n", "Matching:".cyan().bold(), match_mode));
        output.push('\n');
        output.push_str("Ask me anything about solar energy.\n");
        output.push('\n');
        output.push_str(&Self::help());
        output
    }

    /// Command overview
    pub fn help() -> String {
        let mut output = String::new();
        output.push_str("Commands:\n");
        output.push_str("  /help, /h, /?     - Show this help\n");
        output.push_str("  /clear            - Clear the chat\n");
        output.push_str("  /history          - List previous questions\n");
        output.push_str("  /transcript       - Show the full conversation\n");
        output.push_str("  /quit, /exit, /q  - Exit chat\n");
        output
    }

    /// Render the result of one submitted message.
    ///
    /// Faults are shown like any reply, followed by a red error line.
    pub fn format_outcome(outcome: &TurnOutcome) -> String {
        let mut output = Self::ai_line(outcome.reply());
        if let TurnOutcome::Faulted { message, .. } = outcome {
            output.push('\n');
            output.push_str(&format!("{} {}", "Error:".red().bold(), message.red()));
        }
        output
    }

    /// The whole transcript as `User:` / `AI:` pairs
    pub fn format_transcript(transcript: &Transcript) -> String {
        if transcript.is_empty() {
            return format!("{}", "(no messages yet)".dimmed());
        }

        transcript
            .iter()
            .map(|turn| format!("{}\n{}", Self::user_line(turn.user()), Self::ai_line(turn.reply())))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// History panel: a `User: <preview>` label per turn with the reply below it
    pub fn format_history(transcript: &Transcript) -> String {
        if transcript.is_empty() {
            return EMPTY_HISTORY_MESSAGE.to_string();
        }

        let mut output = format!("{}\n", "Previous Chat History".cyan().bold());
        for (i, turn) in transcript.iter().enumerate() {
            let label = format!("User: {}", preview(turn.user(), PREVIEW_CHARS));
            output.push_str(&format!("  {:>2}. {}\n", i + 1, label.bold()));
            output.push_str(&format!("      {}\n", Self::ai_line(turn.reply())));
        }
        output
    }

    fn user_line(text: &str) -> String {
        format!("{} {}", "User:".green().bold(), text)
    }

    fn ai_line(text: &str) -> String {
        format!("{} {}", "AI:".yellow().bold(), text)
    }
}
