//! Chat panel state: visibility, transcript, and in-flight request bookkeeping.
//!
//! # Request lifecycle
//! 1. `begin_submit` appends the visitor message right away and hands back a
//!    `PendingReply` stamped with the current generation and cancel token.
//! 2. The caller awaits the assistant, racing the token.
//! 3. `finish` appends the reply only if the pending reply still belongs to
//!    the current generation.
//! 4. If the caller goes away before `finish`, `abandon` releases its
//!    in-flight slot so the panel does not stay loading.
//!
//! Closing the panel cancels the token and bumps the generation, so a reply
//! that lands after a close/reopen is dropped instead of appended.

use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::warn;
use uuid::Uuid;

use crate::chat::transcript::{ChatMessage, Sender, Transcript};
use crate::llm_client::LlmError;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// Blank text; nothing appended, assistant not called.
    Ignored,
    /// Panel is hidden; nothing appended.
    PanelClosed,
    Replied,
    /// Assistant call failed; visitor message kept, no reply appended.
    Failed,
    /// Panel was closed while the reply was outstanding.
    Cancelled,
}

#[derive(Debug)]
pub struct PendingReply {
    pub generation: u64,
    pub prompt: String,
    pub cancel: CancellationToken,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatSnapshot {
    pub id: Uuid,
    pub open: bool,
    pub loading: bool,
    /// Index of the message the panel should scroll to; only set while open.
    pub scroll_anchor: Option<usize>,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug)]
pub struct ChatWidget {
    open: bool,
    transcript: Transcript,
    in_flight: usize,
    generation: u64,
    cancel: CancellationToken,
    touched_at: Instant,
}

impl ChatWidget {
    pub fn new(greeting: impl Into<String>) -> Self {
        let mut transcript = Transcript::default();
        transcript.push(Sender::Assistant, greeting);
        Self {
            open: false,
            transcript,
            in_flight: 0,
            generation: 0,
            cancel: CancellationToken::new(),
            touched_at: Instant::now(),
        }
    }

    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    #[cfg(test)]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// True when nothing is outstanding and the panel has not been touched
    /// for at least `ttl`.
    pub fn is_idle(&self, now: Instant, ttl: Duration) -> bool {
        !self.is_loading() && now.saturating_duration_since(self.touched_at) >= ttl
    }

    pub fn scroll_anchor(&self) -> Option<usize> {
        if self.open && !self.transcript.is_empty() {
            Some(self.transcript.len() - 1)
        } else {
            None
        }
    }

    pub fn toggle(&mut self) -> bool {
        if self.open {
            self.close();
        } else {
            self.open();
        }
        self.open
    }

    pub fn open(&mut self) {
        self.touched_at = Instant::now();
        self.open = true;
    }

    /// Hides the panel and abandons every outstanding reply. The transcript
    /// is left exactly as it was.
    pub fn close(&mut self) {
        self.touched_at = Instant::now();
        if !self.open {
            return;
        }
        self.open = false;
        self.cancel.cancel();
        self.cancel = CancellationToken::new();
        self.generation += 1;
        self.in_flight = 0;
    }

    pub fn begin_submit(&mut self, text: &str) -> Result<PendingReply, SubmitOutcome> {
        if text.trim().is_empty() {
            return Err(SubmitOutcome::Ignored);
        }
        if !self.open {
            return Err(SubmitOutcome::PanelClosed);
        }

        self.touched_at = Instant::now();
        self.transcript.push(Sender::Visitor, text);
        self.in_flight += 1;

        Ok(PendingReply {
            generation: self.generation,
            prompt: text.to_string(),
            cancel: self.cancel.clone(),
        })
    }

    pub fn finish(
        &mut self,
        pending: &PendingReply,
        result: Result<String, LlmError>,
    ) -> SubmitOutcome {
        if pending.generation != self.generation || pending.cancel.is_cancelled() {
            return SubmitOutcome::Cancelled;
        }

        self.touched_at = Instant::now();
        self.in_flight = self.in_flight.saturating_sub(1);

        match result {
            Ok(reply) => {
                self.transcript.push(Sender::Assistant, reply);
                SubmitOutcome::Replied
            }
            Err(e) => {
                warn!("Chat reply failed, nothing appended: {e}");
                SubmitOutcome::Failed
            }
        }
    }

    /// Releases the in-flight slot of a submission that will never reach
    /// `finish`. A stale generation was already released by `close`.
    pub fn abandon(&mut self, generation: u64) {
        if generation != self.generation {
            return;
        }
        self.touched_at = Instant::now();
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    pub fn snapshot(&self, id: Uuid) -> ChatSnapshot {
        ChatSnapshot {
            id,
            open: self.open,
            loading: self.is_loading(),
            scroll_anchor: self.scroll_anchor(),
            messages: self.transcript.messages().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unavailable() -> LlmError {
        LlmError::Api {
            status: 503,
            message: "down".into(),
        }
    }

    fn open_widget() -> ChatWidget {
        let mut widget = ChatWidget::new("Hi!");
        widget.open();
        widget
    }

    #[test]
    fn test_new_widget_is_closed_with_greeting() {
        let widget = ChatWidget::new("Hi!");
        assert!(!widget.is_open());
        assert!(!widget.is_loading());
        assert_eq!(widget.transcript().len(), 1);
        assert_eq!(widget.transcript().messages()[0].role, Sender::Assistant);
        assert_eq!(widget.scroll_anchor(), None);
    }

    #[test]
    fn test_blank_submission_is_ignored() {
        let mut widget = open_widget();
        for text in ["", "   ", "\n\t"] {
            assert_eq!(widget.begin_submit(text).unwrap_err(), SubmitOutcome::Ignored);
        }
        assert_eq!(widget.transcript().len(), 1);
        assert!(!widget.is_loading());
    }

    #[test]
    fn test_submission_on_closed_panel_is_rejected() {
        let mut widget = ChatWidget::new("Hi!");
        assert_eq!(
            widget.begin_submit("hello").unwrap_err(),
            SubmitOutcome::PanelClosed
        );
        assert_eq!(widget.transcript().len(), 1);
    }

    #[test]
    fn test_begin_submit_appends_visitor_message_immediately() {
        let mut widget = open_widget();
        let pending = widget.begin_submit("  What are your skills?").unwrap();

        assert!(widget.is_loading());
        let last = widget.transcript().messages().last().unwrap();
        assert_eq!(last.role, Sender::Visitor);
        assert_eq!(last.text, "  What are your skills?", "raw text is kept");
        assert_eq!(pending.prompt, "  What are your skills?");
    }

    #[test]
    fn test_finish_success_appends_reply_verbatim() {
        let mut widget = open_widget();
        let pending = widget.begin_submit("hi").unwrap();
        let outcome = widget.finish(&pending, Ok("Hello 👋".to_string()));

        assert_eq!(outcome, SubmitOutcome::Replied);
        assert!(!widget.is_loading());
        assert_eq!(widget.transcript().count(Sender::Assistant), 2);
        assert_eq!(widget.transcript().messages().last().unwrap().text, "Hello 👋");
    }

    #[test]
    fn test_finish_failure_appends_nothing_and_clears_loading() {
        let mut widget = open_widget();
        let pending = widget.begin_submit("hi").unwrap();
        let outcome = widget.finish(&pending, Err(unavailable()));

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert!(!widget.is_loading());
        assert_eq!(widget.transcript().count(Sender::Assistant), 1);
        assert_eq!(widget.transcript().count(Sender::Visitor), 1);
    }

    #[test]
    fn test_overlapping_submissions_keep_loading_until_last_finishes() {
        let mut widget = open_widget();
        let first = widget.begin_submit("one").unwrap();
        let second = widget.begin_submit("two").unwrap();

        widget.finish(&first, Ok("1".into()));
        assert!(widget.is_loading());
        widget.finish(&second, Err(unavailable()));
        assert!(!widget.is_loading());
    }

    #[test]
    fn test_close_cancels_and_drops_stale_reply() {
        let mut widget = open_widget();
        let pending = widget.begin_submit("hi").unwrap();

        widget.close();
        assert!(pending.cancel.is_cancelled());
        assert!(!widget.is_loading());

        widget.open();
        let outcome = widget.finish(&pending, Ok("late".into()));
        assert_eq!(outcome, SubmitOutcome::Cancelled);
        assert!(widget
            .transcript()
            .messages()
            .iter()
            .all(|m| m.text != "late"));
    }

    #[test]
    fn test_abandon_releases_loading_for_current_generation() {
        let mut widget = open_widget();
        let first = widget.begin_submit("one").unwrap();
        let second = widget.begin_submit("two").unwrap();

        widget.abandon(first.generation);
        assert!(widget.is_loading());
        widget.abandon(second.generation);
        assert!(!widget.is_loading());
        assert_eq!(widget.transcript().count(Sender::Visitor), 2);
    }

    #[test]
    fn test_abandon_after_close_leaves_new_requests_alone() {
        let mut widget = open_widget();
        let stale = widget.begin_submit("old").unwrap();
        widget.close();
        widget.open();
        widget.begin_submit("new").unwrap();

        widget.abandon(stale.generation);
        assert!(widget.is_loading(), "only the current request counts");
    }

    #[test]
    fn test_idle_requires_ttl_and_no_outstanding_reply() {
        let ttl = Duration::from_secs(60);
        let mut widget = open_widget();
        let later = Instant::now() + Duration::from_secs(61);
        assert!(!widget.is_idle(Instant::now(), ttl));
        assert!(widget.is_idle(later, ttl));

        widget.begin_submit("hi").unwrap();
        assert!(!widget.is_idle(later, ttl));
    }

    #[test]
    fn test_toggle_preserves_transcript() {
        let mut widget = open_widget();
        let pending = widget.begin_submit("first").unwrap();
        widget.finish(&pending, Ok("reply".into()));
        let before: Vec<String> = widget
            .transcript()
            .messages()
            .iter()
            .map(|m| m.text.clone())
            .collect();

        assert!(!widget.toggle());
        assert!(widget.toggle());

        let after: Vec<String> = widget
            .transcript()
            .messages()
            .iter()
            .map(|m| m.text.clone())
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_scroll_anchor_tracks_latest_message_while_open() {
        let mut widget = open_widget();
        assert_eq!(widget.scroll_anchor(), Some(0));
        widget.begin_submit("hello").unwrap();
        assert_eq!(widget.scroll_anchor(), Some(1));
        widget.close();
        assert_eq!(widget.scroll_anchor(), None);
    }
}
