//! Chat widget: per-visitor panels that relay questions to the assistant.
//!
//! `widget` holds the synchronous state machine, `controller` drives it
//! against an `Assistant`, `registry` owns every live panel and `handlers`
//! exposes them over HTTP.

pub mod controller;
pub mod handlers;
pub mod registry;
pub mod transcript;
pub mod widget;

use thiserror::Error;

pub use controller::{Assistant, ChatController};
pub use registry::{AssistantFactory, ChatRegistry};
pub use widget::{ChatSnapshot, SubmitOutcome};

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("chat capacity of {0} panels reached")]
    AtCapacity(usize),
}
