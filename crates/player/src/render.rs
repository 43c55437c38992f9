//! Terminal rendering for chat turns.

use tutor_domain::{ConversationHistory, Role, Turn};

const USER_LABEL: &str = "You:";
const AI_LABEL: &str = "AI Tutor:";
const ERROR_LABEL: &str = "Error:";
const THINKING: &str = "Generating response...";

pub fn render_turn(turn: &Turn) -> String {
    let label = match turn.role() {
        Role::User => USER_LABEL,
        Role::Ai => AI_LABEL,
    };
    format!("{label} {}", turn.content())
}

pub fn render_turns(turns: &[Turn]) -> String {
    turns
        .iter()
        .map(render_turn)
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_history(history: &ConversationHistory) -> String {
    if history.is_empty() {
        return "(no messages yet)".to_string();
    }
    render_turns(history.turns())
}

pub fn render_error(error: &impl std::fmt::Display) -> String {
    format!("{ERROR_LABEL} {error}. Your conversation is unchanged; please try again.")
}

/// Status line shown while a reply is being generated.
pub fn thinking() -> &'static str {
    THINKING
}

/// Carriage-return sequence that blanks out a status line printed without a newline.
pub fn clear_status(status: &str) -> String {
    format!("\r{}\r", " ".repeat(status.chars().count()))
}

pub fn banner(backend: &str) -> String {
    format!(
        "The Concept Clarifier: Your AI Learning Partner\n\
         Backend: {backend}\n\
         Ask a question about your subject, or type /help for commands."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_distinguish_speakers() {
        assert_eq!(
            render_turn(&Turn::new(Role::User, "What is entropy?")),
            "You: What is entropy?"
        );
        assert_eq!(
            render_turn(&Turn::ai("What happens to a tidy room over time?")),
            "AI Tutor: What happens to a tidy room over time?"
        );
    }

    #[test]
    fn turns_render_in_order() {
        let turns = vec![Turn::new(Role::User, "a"), Turn::ai("b")];
        assert_eq!(render_turns(&turns), "You: a\n\nAI Tutor: b");
    }

    #[test]
    fn empty_history_has_placeholder() {
        assert_eq!(
            render_history(&ConversationHistory::new()),
            "(no messages yet)"
        );
    }

    #[test]
    fn thinking_status_can_be_cleared() {
        assert_eq!(thinking(), "Generating response...");

        let cleared = clear_status(thinking());
        assert!(cleared.starts_with('\r'));
        assert!(cleared.ends_with('\r'));
        assert_eq!(cleared.trim_matches('\r'), " ".repeat(thinking().len()));
    }

    #[test]
    fn error_mentions_failure() {
        let rendered = render_error(&"Engine request failed: timeout");
        assert!(rendered.starts_with("Error: Engine request failed: timeout"));
    }
}
