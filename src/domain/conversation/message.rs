//! Message entity for the concierge conversation.
//!
//! Messages are immutable records of user/assistant turns.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Role of a message sender in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// User input.
    User,
    /// Assistant response.
    Assistant,
}

/// An immutable, role-tagged message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: String,
}

impl Message {
    /// Creates a user message.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the prompt is blank
    pub fn user(content: impl Into<String>) -> Result<Self, ValidationError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(ValidationError::empty_field("prompt"));
        }
        Ok(Self {
            role: Role::User,
            content,
        })
    }

    /// Creates an assistant message. Replies are recorded as returned.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_keeps_content() {
        let msg = Message::user("Quel entretien pour mon Alma ?").unwrap();
        assert_eq!(msg.role(), Role::User);
        assert_eq!(msg.content(), "Quel entretien pour mon Alma ?");
    }

    #[test]
    fn blank_user_message_is_rejected() {
        assert!(Message::user("   ").is_err());
        assert!(Message::user("").is_err());
    }

    #[test]
    fn assistant_message_has_assistant_role() {
        assert_eq!(Message::assistant("Bonjour").role(), Role::Assistant);
    }

    #[test]
    fn role_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
    }
}
