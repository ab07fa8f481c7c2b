//! Assistant Adapters.
//!
//! Implementations of the assistant ports.
//!
//! ## Available Adapters
//!
//! - `MockAssistantConnector` - Configurable mock for testing
//! - `MistralConnector` - Mistral chat-completions models

mod mistral_assistant;
mod mock_assistant;

pub use mistral_assistant::{
    persona_prompt, MistralAssistant, MistralConfig, MistralConnector, DEFAULT_BASE_URL,
    DEFAULT_MODEL,
};
pub use mock_assistant::{
    MockAssistant, MockAssistantConnector, MockCall, MockError, DEFAULT_MOCK_REPLY,
};
