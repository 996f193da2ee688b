//! Async orchestration for one visitor's chat panel.
//!
//! The widget lock is only held for bookkeeping, never across an await. The
//! assistant sits behind its own async lock, which serializes a visitor's
//! submissions: a second message queues behind the first instead of racing it.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::chat::widget::{ChatSnapshot, ChatWidget, SubmitOutcome};
use crate::llm_client::{InferenceClient, LlmError};

/// Whatever answers visitor messages for a panel.
#[async_trait]
pub trait Assistant: Send {
    async fn reply(&mut self, message: &str) -> Result<String, LlmError>;

    /// Releases any conversation state. Called when the panel is torn down.
    fn dispose(&mut self) {}
}

#[async_trait]
impl Assistant for InferenceClient {
    async fn reply(&mut self, message: &str) -> Result<String, LlmError> {
        Ok(self.send(message).await)
    }

    fn dispose(&mut self) {
        InferenceClient::dispose(self);
    }
}

fn lock(widget: &Mutex<ChatWidget>) -> MutexGuard<'_, ChatWidget> {
    widget.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Holds a submission's in-flight slot. Dropping it while armed (the submit
/// future was dropped mid-reply) hands the slot back to the widget.
struct InFlight<'a> {
    widget: &'a Mutex<ChatWidget>,
    generation: u64,
    armed: bool,
}

impl InFlight<'_> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.armed {
            lock(self.widget).abandon(self.generation);
            debug!(generation = self.generation, "Chat submission abandoned");
        }
    }
}

pub struct ChatController {
    id: Uuid,
    widget: Mutex<ChatWidget>,
    assistant: tokio::sync::Mutex<Box<dyn Assistant>>,
}

impl ChatController {
    pub fn new(id: Uuid, greeting: impl Into<String>, assistant: Box<dyn Assistant>) -> Self {
        Self {
            id,
            widget: Mutex::new(ChatWidget::new(greeting)),
            assistant: tokio::sync::Mutex::new(assistant),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    fn widget(&self) -> MutexGuard<'_, ChatWidget> {
        lock(&self.widget)
    }

    pub async fn snapshot(&self) -> ChatSnapshot {
        self.widget().snapshot(self.id)
    }

    pub async fn toggle(&self) -> ChatSnapshot {
        let mut widget = self.widget();
        let open = widget.toggle();
        debug!(chat_id = %self.id, open, "Chat panel toggled");
        widget.snapshot(self.id)
    }

    pub async fn open(&self) -> ChatSnapshot {
        let mut widget = self.widget();
        widget.open();
        widget.snapshot(self.id)
    }

    pub async fn close(&self) -> ChatSnapshot {
        let mut widget = self.widget();
        widget.close();
        widget.snapshot(self.id)
    }

    /// Appends the visitor message, waits for the assistant, appends its reply.
    ///
    /// Returns early with `Cancelled` if the panel is closed while waiting. If
    /// this future is dropped before the reply lands, loading is released.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let pending = match self.widget().begin_submit(text) {
            Ok(pending) => pending,
            Err(outcome) => return outcome,
        };
        let slot = InFlight {
            widget: &self.widget,
            generation: pending.generation,
            armed: true,
        };

        let result = tokio::select! {
            biased;
            _ = pending.cancel.cancelled() => None,
            result = async {
                let mut assistant = self.assistant.lock().await;
                assistant.reply(&pending.prompt).await
            } => Some(result),
        };

        slot.disarm();
        let outcome = match result {
            Some(result) => self.widget().finish(&pending, result),
            None => SubmitOutcome::Cancelled,
        };

        debug!(chat_id = %self.id, ?outcome, "Chat submission finished");
        outcome
    }

    #[cfg(test)]
    pub async fn is_loading(&self) -> bool {
        self.widget().is_loading()
    }

    /// Closes the panel if it has been idle for `ttl` with nothing
    /// outstanding. The check and the close happen under one lock, so a
    /// submission either lands first (and keeps the panel) or sees it closed.
    pub async fn close_if_idle(&self, now: Instant, ttl: Duration) -> bool {
        let mut widget = self.widget();
        if !widget.is_idle(now, ttl) {
            return false;
        }
        widget.close();
        true
    }

    /// Closes the panel (cancelling outstanding replies) and disposes the
    /// assistant's conversation.
    pub async fn teardown(&self) {
        self.close().await;
        self.assistant.lock().await.dispose();
        info!(chat_id = %self.id, "Chat panel torn down");
    }
}
