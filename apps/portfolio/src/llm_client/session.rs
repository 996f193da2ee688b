//! Conversation sessions and the inference client chat panels talk to.
//!
//! # Lifecycle
//! - An `InferenceClient` is owned by exactly one chat panel.
//! - Its `ConversationSession` is created on the first `send` and reused for
//!   every later turn, so the model sees the whole conversation.
//! - `dispose` (or dropping the client) ends the session.
//!
//! `InferenceClient::send` never fails: transport and service errors are
//! logged and replaced by `SERVICE_APOLOGY`, blank replies by
//! `EMPTY_REPLY_FALLBACK`.

use std::sync::Arc;

use tracing::{debug, error};

use crate::llm_client::{CompletionBackend, CompletionRequest, LlmError, Turn};

pub const EMPTY_REPLY_FALLBACK: &str =
    "I'm having a bit of trouble thinking right now. Please try again.";
pub const SERVICE_APOLOGY: &str = "Sorry, I encountered an error connecting to the AI service. Please check your API key or try again later.";

/// Fixed parameters every session of this deployment is created with.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub system_instruction: Arc<str>,
    pub temperature: f32,
}

/// Turn history with one hosted model conversation.
#[derive(Debug)]
pub struct ConversationSession {
    settings: SessionSettings,
    history: Vec<Turn>,
}

impl ConversationSession {
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            settings,
            history: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Sends one user message with the prior history as context.
    ///
    /// The exchange is recorded only when the model produced a non-blank
    /// reply; failed or empty turns leave the history untouched.
    pub async fn send(
        &mut self,
        backend: &dyn CompletionBackend,
        message: &str,
    ) -> Result<String, LlmError> {
        let mut turns = self.history.clone();
        turns.push(Turn::user(message));

        let reply = backend
            .complete(CompletionRequest {
                system_instruction: &self.settings.system_instruction,
                temperature: self.settings.temperature,
                turns: &turns,
            })
            .await?;

        if !reply.trim().is_empty() {
            turns.push(Turn::model(reply.clone()));
            self.history = turns;
        }
        Ok(reply)
    }
}

pub struct InferenceClient {
    backend: Arc<dyn CompletionBackend>,
    settings: SessionSettings,
    session: Option<ConversationSession>,
}

impl InferenceClient {
    pub fn new(backend: Arc<dyn CompletionBackend>, settings: SessionSettings) -> Self {
        Self {
            backend,
            settings,
            session: None,
        }
    }

    #[cfg(test)]
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Returns the conversation session, creating it on first use.
    pub fn session(&mut self) -> &mut ConversationSession {
        let settings = &self.settings;
        let model = self.backend.model();
        self.session.get_or_insert_with(|| {
            debug!(model = %model, "Creating conversation session");
            ConversationSession::new(settings.clone())
        })
    }

    /// Relays one message and returns the reply text, or a fixed fallback.
    pub async fn send(&mut self, message: &str) -> String {
        let backend = Arc::clone(&self.backend);
        let session = self.session();

        match session.send(backend.as_ref(), message).await {
            Ok(reply) if reply.trim().is_empty() => EMPTY_REPLY_FALLBACK.to_string(),
            Ok(reply) => reply,
            Err(e) => {
                error!(model = %backend.model(), "Inference call failed: {e}");
                SERVICE_APOLOGY.to_string()
            }
        }
    }

    pub fn dispose(&mut self) {
        if self.session.take().is_some() {
            debug!("Conversation session disposed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::TurnRole;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Replies from a script and records every request it saw.
    struct ScriptedBackend {
        replies: Mutex<Vec<Result<String, LlmError>>>,
        seen: Mutex<Vec<Vec<Turn>>>,
    }

    impl ScriptedBackend {
        fn new(replies: Vec<Result<String, LlmError>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl CompletionBackend for ScriptedBackend {
        async fn complete(&self, request: CompletionRequest<'_>) -> Result<String, LlmError> {
            self.seen.lock().unwrap().push(request.turns.to_vec());
            self.replies.lock().unwrap().remove(0)
        }

        fn model(&self) -> &str {
            "scripted"
        }
    }

    fn settings() -> SessionSettings {
        SessionSettings {
            system_instruction: Arc::from("system"),
            temperature: 0.7,
        }
    }

    #[tokio::test]
    async fn test_session_created_lazily_and_reused() {
        let backend = ScriptedBackend::new(vec![Ok("one".into()), Ok("two".into())]);
        let mut client = InferenceClient::new(backend.clone(), settings());
        assert!(!client.has_session());

        assert_eq!(client.send("first").await, "one");
        assert!(client.has_session());
        assert_eq!(client.send("second").await, "two");

        let seen = backend.seen.lock().unwrap();
        assert_eq!(seen[0].len(), 1);
        assert_eq!(seen[1].len(), 3, "second call carries prior exchange");
        assert_eq!(seen[1][1], Turn::model("one"));
        assert_eq!(seen[1][2].role, TurnRole::User);
    }

    #[tokio::test]
    async fn test_empty_reply_uses_fallback() {
        let backend = ScriptedBackend::new(vec![Ok("   ".into())]);
        let mut client = InferenceClient::new(backend, settings());
        assert_eq!(client.send("hello").await, EMPTY_REPLY_FALLBACK);
        assert!(client.session().history().is_empty());
    }

    #[tokio::test]
    async fn test_service_error_becomes_apology() {
        let backend = ScriptedBackend::new(vec![Err(LlmError::Api {
            status: 400,
            message: "bad key".into(),
        })]);
        let mut client = InferenceClient::new(backend, settings());
        assert_eq!(client.send("hello").await, SERVICE_APOLOGY);
        assert!(client.session().history().is_empty());
    }

    #[tokio::test]
    async fn test_dispose_starts_fresh_conversation() {
        let backend = ScriptedBackend::new(vec![Ok("a".into()), Ok("b".into())]);
        let mut client = InferenceClient::new(backend.clone(), settings());
        client.send("first").await;
        client.dispose();
        assert!(!client.has_session());

        client.send("again").await;
        let seen = backend.seen.lock().unwrap();
        assert_eq!(seen[1].len(), 1, "history cleared by dispose");
    }
}
