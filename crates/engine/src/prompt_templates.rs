//! The tutoring prompt template.
//!
//! The instruction text is configuration: it can be overridden without touching
//! the exchange logic (see `infrastructure::prompt_templates` for resolution).

use tutor_domain::ConversationHistory;

/// Marker replaced by the serialized conversation.
pub const STUDENT_QUERY_PLACEHOLDER: &str = "{student_query}";

/// Environment variable holding an inline template override.
pub const TEMPLATE_ENV_VAR: &str = "TUTOR_PROMPT_TEMPLATE";

/// Environment variable holding a path to a template file.
pub const TEMPLATE_PATH_ENV_VAR: &str = "TUTOR_PROMPT_TEMPLATE_PATH";

/// Built-in tutor instructions.
pub const DEFAULT_TUTOR_TEMPLATE: &str = r#"### STUDENT QUERY:
{student_query}

### INSTRUCTION:
You are an AI tutor designed to help students understand concepts in a way that mimics a teacher-student interaction in a classroom.
Your job is to provide explanations, more examples, and encourage critical thinking, rather than giving direct answers.
Break down complex ideas into simpler parts, ask follow-up questions to gauge understanding, and use analogies when appropriate.
Provide your response in a friendly and engaging manner, as if you are having a conversation with the student.

### RESPONSE:
"#;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PromptTemplateError {
    #[error("Prompt template must contain the {{student_query}} placeholder")]
    MissingPlaceholder,
    #[error("Failed to read prompt template from {path}: {message}")]
    Unreadable { path: String, message: String },
}

/// Instruction template with a single `{student_query}` slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    text: String,
}

impl PromptTemplate {
    pub fn new(text: impl Into<String>) -> Result<Self, PromptTemplateError> {
        let text = text.into();
        if !text.contains(STUDENT_QUERY_PLACEHOLDER) {
            return Err(PromptTemplateError::MissingPlaceholder);
        }
        Ok(Self { text })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Substitute `student_query` into the template.
    pub fn render(&self, student_query: &str) -> String {
        self.text.replace(STUDENT_QUERY_PLACEHOLDER, student_query)
    }

    /// Render a whole conversation as `"<role>: <content>"` lines.
    pub fn render_history(&self, history: &ConversationHistory) -> String {
        self.render(&history.to_transcript())
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            text: DEFAULT_TUTOR_TEMPLATE.to_string(),
        }
    }
}
