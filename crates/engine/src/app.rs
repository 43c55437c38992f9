//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    clock::SystemClock,
    config::EngineConfig,
    groq::GroqClient,
    ports::{ClockPort, LlmPort},
    prompt_templates::{resolve_template, TemplateSource},
};
use crate::prompt_templates::{PromptTemplate, PromptTemplateError};
use crate::use_cases::tutoring::{Exchange, TutoringUseCases};

/// Main application state.
///
/// Holds the use cases and the ports they share.
/// Passed to HTTP handlers via Axum state, and used directly by in-process callers.
pub struct App {
    pub use_cases: UseCases,
    pub clock: Arc<dyn ClockPort>,
}

/// Container for all use cases.
pub struct UseCases {
    pub tutoring: TutoringUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        llm: Arc<dyn LlmPort>,
        template: PromptTemplate,
        max_tokens: Option<u32>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let exchange = Arc::new(Exchange::new(llm, Arc::new(template), max_tokens));

        Self {
            use_cases: UseCases {
                tutoring: TutoringUseCases::new(exchange),
            },
            clock,
        }
    }

    /// Wire the production Groq client, template and clock from configuration.
    pub fn from_config(config: &EngineConfig) -> Result<Self, PromptTemplateError> {
        let (template, source) = resolve_template(
            config.prompt_template.as_deref(),
            config.prompt_template_path.as_deref(),
        )?;
        match &source {
            TemplateSource::Inline => tracing::info!("Using inline prompt template override"),
            TemplateSource::File(path) => {
                tracing::info!(path = %path.display(), "Loaded prompt template from file")
            }
            TemplateSource::Default => tracing::debug!("Using built-in prompt template"),
        }

        let llm = GroqClient::with_timeout(
            &config.llm.base_url,
            &config.llm.model,
            config.llm.api_key.clone(),
            config.llm.timeout_secs,
        );
        if !llm.has_api_key() {
            tracing::warn!("GROQ_API_KEY is not set; chat requests will fail until it is configured");
        }
        tracing::info!(
            model = %llm.model(),
            base_url = %config.llm.base_url,
            max_tokens = config.llm.max_tokens,
            "Completion client configured"
        );

        Ok(Self::new(
            Arc::new(llm),
            template,
            Some(config.llm.max_tokens),
            Arc::new(SystemClock::new()),
        ))
    }
}
