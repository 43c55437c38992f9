//! Backends the chat session can run exchanges against.
//!
//! `LocalBackend` calls the engine's exchange in-process. `RemoteBackend`
//! posts to a running engine's `/api/chat`, the same way the browser client does.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tutor_domain::ConversationHistory;
use tutor_engine::use_cases::{Exchange, Exchanged};
use tutor_shared::{ChatRequest, ChatResponse, ErrorResponse, CHAT_PATH};
use url::Url;

use crate::error::PlayerError;

/// Something that can turn (history, message) into a reply and a new history.
#[async_trait]
pub trait TutorBackend: Send + Sync {
    async fn exchange(
        &self,
        history: &ConversationHistory,
        message: &str,
    ) -> Result<Exchanged, PlayerError>;

    /// Short label for the startup banner.
    fn describe(&self) -> String;
}

/// Runs the exchange in this process.
pub struct LocalBackend {
    exchange: Arc<Exchange>,
}

impl LocalBackend {
    pub fn new(exchange: Arc<Exchange>) -> Self {
        Self { exchange }
    }
}

#[async_trait]
impl TutorBackend for LocalBackend {
    async fn exchange(
        &self,
        history: &ConversationHistory,
        message: &str,
    ) -> Result<Exchanged, PlayerError> {
        Ok(self.exchange.execute(history, message).await?)
    }

    fn describe(&self) -> String {
        "local".to_string()
    }
}

/// Talks to a running engine over HTTP.
pub struct RemoteBackend {
    client: reqwest::Client,
    chat_url: Url,
}

impl RemoteBackend {
    pub fn new(server_url: &Url) -> Result<Self, PlayerError> {
        let chat_url = chat_url(server_url)?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(180))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Ok(Self { client, chat_url })
    }
}

/// Resolve the chat endpoint under `server_url`, keeping any base path it has.
fn chat_url(server_url: &Url) -> Result<Url, PlayerError> {
    let mut base = server_url.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    base.join(CHAT_PATH.trim_start_matches('/'))
        .map_err(|e| PlayerError::InvalidUrl(e.to_string()))
}

#[async_trait]
impl TutorBackend for RemoteBackend {
    async fn exchange(
        &self,
        history: &ConversationHistory,
        message: &str,
    ) -> Result<Exchanged, PlayerError> {
        let body = ChatRequest::new(message, history.clone());

        let response = self
            .client
            .post(self.chat_url.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| PlayerError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .map_err(|e| PlayerError::Transport(e.to_string()))?;
            let message = match serde_json::from_str::<ErrorResponse>(&text) {
                Ok(ErrorResponse {
                    error,
                    details: Some(details),
                }) => format!("{error}: {details}"),
                Ok(ErrorResponse { error, .. }) => error,
                Err(_) => text,
            };
            return Err(PlayerError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| PlayerError::Transport(e.to_string()))?;

        Ok(Exchanged {
            reply: chat.response,
            history: chat.conversation_history,
        })
    }

    fn describe(&self) -> String {
        format!("remote ({})", self.chat_url)
    }
}
