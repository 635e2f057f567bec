//! Prompt templates and canned replies

/// Persona and topic restriction attached to every model invocation.
pub const SYSTEM_INSTRUCTION: &str = r#"You are a Solar Industry Expert AI Assistant.
Provide accurate and professional information about:
- Solar Panel Technology
- Installation Processes
- Maintenance Requirements
- Cost & ROI Analysis
- Industry Regulations
- Market Trends

Only answer questions related to solar energy. If a question is not related to solar, politely refuse to answer."#;

/// Reply recorded for a message the relevance filter rejected.
pub const REFUSAL_MESSAGE: &str = "⚠️ Sorry, I can only answer questions related to solar energy.";

/// Prefix of a reply that stands in for a failed model call.
pub const ERROR_MARKER: &str = "⚠️ Error: ";

/// Templates for the texts the assistant produces itself
pub struct PromptTemplate;

impl PromptTemplate {
    /// System instruction sent with every request
    pub fn system_instruction() -> &'static str {
        SYSTEM_INSTRUCTION
    }

    /// Canned reply for off-topic messages
    pub fn refusal() -> &'static str {
        REFUSAL_MESSAGE
    }

    /// Reply text recorded in place of a model answer when the call failed
    pub fn fault_reply(message: &str) -> String {
        format!("{}{}", ERROR_MARKER, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_reply_has_marker() {
        let reply = PromptTemplate::fault_reply("quota exceeded");
        assert_eq!(reply, "⚠️ Error: quota exceeded");
        assert!(reply.starts_with(ERROR_MARKER));
    }

    #[test]
    fn test_refusal_is_not_fault() {
        assert!(!PromptTemplate::refusal().starts_with(ERROR_MARKER));
    }

    #[test]
    fn test_system_instruction_restricts_topic() {
        let instruction = PromptTemplate::system_instruction();
        assert!(instruction.starts_with("You are a Solar Industry Expert AI Assistant."));
        assert!(instruction.contains("Only answer questions related to solar energy."));
    }
}
