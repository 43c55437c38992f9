//! Exchange use case.
//!
//! Turns one student message plus the conversation so far into a tutor reply.
//! The caller owns the history: it is borrowed here, copied, extended with the
//! new user and ai turns, and handed back. Nothing is kept between calls.

use std::sync::Arc;
use tracing::Instrument;
use tutor_domain::{ConversationHistory, Turn, UserMessage};
use uuid::Uuid;

use crate::infrastructure::ports::{LlmError, LlmPort, LlmRequest};
use crate::prompt_templates::PromptTemplate;

use super::TutorError;

/// Sampling temperature for tutor replies. Pinned to keep output stable for a given prompt.
pub const TUTOR_TEMPERATURE: f32 = 0.0;

/// Result of a successful exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct Exchanged {
    /// The tutor's reply text.
    pub reply: String,
    /// Input history followed by the new user turn and the ai turn.
    pub history: ConversationHistory,
}

/// Conversation-to-completion adapter.
///
/// Orchestrates: prompt rendering, the completion call, history extension.
pub struct Exchange {
    llm: Arc<dyn LlmPort>,
    template: Arc<PromptTemplate>,
    max_tokens: Option<u32>,
}

impl Exchange {
    pub fn new(llm: Arc<dyn LlmPort>, template: Arc<PromptTemplate>, max_tokens: Option<u32>) -> Self {
        Self {
            llm,
            template,
            max_tokens,
        }
    }

    /// Render the prompt for `history` without calling the model.
    pub fn render_prompt(&self, history: &ConversationHistory) -> String {
        self.template.render_history(history)
    }

    /// Run one exchange.
    ///
    /// # Arguments
    /// * `history` - Prior turns, oldest first. Never modified.
    /// * `message` - The student's new message
    ///
    /// # Returns
    /// * `Ok(Exchanged)` - Reply plus the history extended by exactly two turns
    /// * `Err(TutorError::Validation)` - `message` is blank; the model is not called
    /// * `Err(TutorError::Service)` - The completion call failed; no turns are kept
    pub async fn execute(
        &self,
        history: &ConversationHistory,
        message: &str,
    ) -> Result<Exchanged, TutorError> {
        let message = UserMessage::new(message)?;
        let exchange_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "exchange",
            exchange_id = %exchange_id,
            prior_turns = history.len()
        );
        self.run(history, &message).instrument(span).await
    }

    async fn run(
        &self,
        history: &ConversationHistory,
        message: &UserMessage,
    ) -> Result<Exchanged, TutorError> {
        let mut working = history.clone();
        working.push(Turn::user(message));

        let prompt = self.render_prompt(&working);
        let request = LlmRequest::from_prompt(prompt)
            .with_temperature(TUTOR_TEMPERATURE)
            .with_max_tokens(self.max_tokens);

        let response = self.llm.generate(request).await.map_err(|e| {
            tracing::warn!(error = %e, "Completion call failed");
            TutorError::Service(e)
        })?;

        if let Some(usage) = response.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                finish_reason = ?response.finish_reason,
                "Completion received"
            );
        }

        if response.content.trim().is_empty() {
            tracing::warn!("Completion returned no text");
            return Err(TutorError::Service(LlmError::InvalidResponse(
                "Completion contained no text".to_string(),
            )));
        }

        let reply = response.content;
        working.push(Turn::ai(reply.clone()));

        tracing::info!(turns = working.len(), "Exchange complete");
        Ok(Exchanged {
            reply,
            history: working,
        })
    }
}
