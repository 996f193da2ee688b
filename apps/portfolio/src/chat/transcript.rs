use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Visitor,
    Assistant,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatMessage {
    pub role: Sender,
    pub text: String,
    /// Creation time, milliseconds since the Unix epoch.
    pub timestamp: i64,
}

/// Append-only message log of one chat panel. Order is insertion order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn push(&mut self, role: Sender, text: impl Into<String>) -> usize {
        self.messages.push(ChatMessage {
            role,
            text: text.into(),
            timestamp: Utc::now().timestamp_millis(),
        });
        self.messages.len() - 1
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[cfg(test)]
    pub fn count(&self, role: Sender) -> usize {
        self.messages.iter().filter(|m| m.role == role).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut transcript = Transcript::default();
        assert_eq!(transcript.push(Sender::Assistant, "hello"), 0);
        assert_eq!(transcript.push(Sender::Visitor, "hi"), 1);
        assert_eq!(transcript.push(Sender::Assistant, "how can I help?"), 2);

        let texts: Vec<&str> = transcript.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["hello", "hi", "how can I help?"]);
        assert_eq!(transcript.count(Sender::Assistant), 2);
    }

    #[test]
    fn test_timestamps_are_non_decreasing() {
        let mut transcript = Transcript::default();
        for i in 0..20 {
            transcript.push(Sender::Visitor, i.to_string());
        }
        let stamps: Vec<i64> = transcript.messages().iter().map(|m| m.timestamp).collect();
        assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let mut transcript = Transcript::default();
        transcript.push(Sender::Visitor, "Skills?");
        let json = serde_json::to_value(&transcript).unwrap();
        assert_eq!(json[0]["role"], "visitor");
        assert_eq!(json[0]["text"], "Skills?");
    }
}
