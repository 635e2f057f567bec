//! Slash commands understood by the chat REPL

/// A parsed `/command` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    /// Clear the visible transcript
    Clear,
    /// Show the history panel
    History,
    /// Re-render the whole conversation
    Transcript,
    Quit,
}

impl ReplCommand {
    /// Parse a line whose first word is a known command.
    ///
    /// Anything else, including text that merely starts with `/`, is an
    /// ordinary message and yields `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let command = line.split_whitespace().next()?;
        match command.to_lowercase().as_str() {
            "/help" | "/h" | "/?" => Some(ReplCommand::Help),
            "/clear" => Some(ReplCommand::Clear),
            "/history" => Some(ReplCommand::History),
            "/transcript" => Some(ReplCommand::Transcript),
            "/quit" | "/exit" | "/q" => Some(ReplCommand::Quit),
            _ => None,
        }
    }
}
