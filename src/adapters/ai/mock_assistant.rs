//! Mock assistant for testing.
//!
//! Implements both assistant ports so tests can run the full `ask` path
//! without calling a real model.
//!
//! # Features
//!
//! - Queued replies, consumed in order across connections
//! - Error injection
//! - Simulated latency
//! - Call tracking (user name, prompt and history per call)
//!
//! # Example
//!
//! ```ignore
//! let connector = MockAssistantConnector::new()
//!     .with_reply("Bonjour Yannick.")
//!     .with_error(MockError::Unavailable { message: "down".into() });
//! ```

use async_trait::async_trait;
use secrecy::Secret;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::conversation::Message;
use crate::ports::{AssistantConnector, AssistantError, AssistantService};

/// Reply used when the queue is empty.
pub const DEFAULT_MOCK_REPLY: &str = "Bien noté.";

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    /// Simulate rate limiting.
    RateLimited { retry_after_secs: u32 },
    /// Simulate provider unavailable.
    Unavailable { message: String },
    /// Simulate authentication failure.
    AuthenticationFailed,
    /// Simulate network error.
    Network { message: String },
    /// Simulate timeout.
    Timeout { timeout_secs: u32 },
}

impl From<MockError> for AssistantError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited { retry_after_secs } => {
                AssistantError::rate_limited(retry_after_secs)
            }
            MockError::Unavailable { message } => AssistantError::unavailable(message),
            MockError::AuthenticationFailed => AssistantError::AuthenticationFailed,
            MockError::Network { message } => AssistantError::network(message),
            MockError::Timeout { timeout_secs } => AssistantError::timeout(timeout_secs),
        }
    }
}

/// A recorded `ask` call.
#[derive(Debug, Clone, PartialEq)]
pub struct MockCall {
    pub user_name: String,
    pub prompt: String,
    pub history: Vec<Message>,
}

#[derive(Debug, Default)]
struct MockState {
    replies: VecDeque<Result<String, MockError>>,
    calls: Vec<MockCall>,
    connections: usize,
}

/// Mock connector; every assistant it creates shares its queue and log.
#[derive(Debug, Clone, Default)]
pub struct MockAssistantConnector {
    state: Arc<Mutex<MockState>>,
    delay: Duration,
}

impl MockAssistantConnector {
    /// Creates a mock that answers `DEFAULT_MOCK_REPLY`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        self.lock().replies.push_back(Ok(reply.into()));
        self
    }

    /// Queues a failure.
    pub fn with_error(self, error: MockError) -> Self {
        self.lock().replies.push_back(Err(error));
        self
    }

    /// Adds latency to every call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Calls made so far, in order.
    pub fn calls(&self) -> Vec<MockCall> {
        self.lock().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    /// Number of assistants created.
    pub fn connection_count(&self) -> usize {
        self.lock().connections
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AssistantConnector for MockAssistantConnector {
    fn connect(
        &self,
        _credential: &Secret<String>,
        user_name: &str,
    ) -> Result<Box<dyn AssistantService>, AssistantError> {
        self.lock().connections += 1;
        Ok(Box::new(MockAssistant {
            connector: self.clone(),
            user_name: user_name.to_string(),
        }))
    }
}

/// Assistant created by `MockAssistantConnector`.
pub struct MockAssistant {
    connector: MockAssistantConnector,
    user_name: String,
}

#[async_trait]
impl AssistantService for MockAssistant {
    async fn ask(&self, prompt: &str, history: &[Message]) -> Result<String, AssistantError> {
        if !self.connector.delay.is_zero() {
            sleep(self.connector.delay).await;
        }

        let mut state = self.connector.lock();
        state.calls.push(MockCall {
            user_name: self.user_name.clone(),
            prompt: prompt.to_string(),
            history: history.to_vec(),
        });

        match state.replies.pop_front() {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(error)) => Err(error.into()),
            None => Ok(DEFAULT_MOCK_REPLY.to_string()),
        }
    }
}
