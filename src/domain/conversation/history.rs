//! Append-only conversation history.

use serde::Serialize;

use super::Message;

/// Ordered history of concierge turns, in causal order.
///
/// # Invariants
///
/// - messages are only ever appended
/// - a user message and its reply are appended together
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one completed turn.
    pub fn record_exchange(&mut self, prompt: Message, reply: Message) {
        self.messages.push(prompt);
        self.messages.push(reply);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
