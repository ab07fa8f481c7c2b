//! Assistant Ports - Interface for the conversational concierge.
//!
//! Two ports split the lifecycle of an assistant call:
//!
//! - `AssistantConnector` builds a service from a credential and the
//!   signed-in user's name. The session connects afresh for every prompt.
//! - `AssistantService` answers one prompt given the prior history.
//!
//! # Example
//!
//! ```ignore
//! let service = connector.connect(&credential, "Yannick")?;
//! let reply = service.ask("Comment entretenir mon Alma ?", history).await?;
//! ```

use async_trait::async_trait;
use secrecy::Secret;

use crate::domain::conversation::Message;

/// Builds assistant services bound to a credential and a user.
///
/// # Contract
///
/// Implementations must:
/// - Not perform network I/O while connecting
/// - Return `AssistantError::InvalidRequest` for unusable credentials
pub trait AssistantConnector: Send + Sync {
    /// Creates a service for one call on behalf of `user_name`.
    fn connect(
        &self,
        credential: &Secret<String>,
        user_name: &str,
    ) -> Result<Box<dyn AssistantService>, AssistantError>;
}

/// Answers prompts with the conversation so far as context.
///
/// # Contract
///
/// Implementations must:
/// - Treat `history` as the turns before `prompt`, in order
/// - Send `prompt` as the final user turn
/// - Make exactly one attempt; retries are the caller's decision
#[async_trait]
pub trait AssistantService: Send + Sync {
    /// Returns the assistant's reply to `prompt`.
    async fn ask(&self, prompt: &str, history: &[Message]) -> Result<String, AssistantError>;
}

/// Assistant call errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssistantError {
    /// Rate limited by the provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// API key rejected.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid request configuration.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Provider returned no content.
    #[error("empty reply")]
    EmptyReply,

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },
}

impl AssistantError {
    /// Creates a rate limited error.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates a timeout error.
    pub fn timeout(timeout_secs: u32) -> Self {
        Self::Timeout { timeout_secs }
    }

    /// Returns true if a later identical call might succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::RateLimited { .. } | Self::Unavailable { .. } | Self::Network(_) | Self::Timeout { .. }
        )
    }
}
