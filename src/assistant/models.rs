//! The core models for a stateful conversation with the travel copilot.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use crate::gemini::Role;

/// One committed turn in the conversation.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Message {
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Commits a turn with the current time.
    pub fn new(role: Role, text: &str) -> Self {
        Message {
            role,
            text: text.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Append-only ordered log of conversation turns. Messages are never
/// edited, removed, or reordered once pushed.
#[derive(Default)]
pub struct MessageLog(Vec<Message>);

impl MessageLog {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, msg: Message) {
        self.0.push(msg)
    }

    pub fn messages(&self) -> &[Message] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.0.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.0.iter()
    }
}
