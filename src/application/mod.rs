//! Application layer - orchestration between the domain and the ports.
//!
//! - `PageStateMachine` - validates and applies page actions
//! - `AssistantSessionAdapter` - assistant calls and conversation history
//! - `ConciergeService` - owns the session and serialises every action

mod assistant_adapter;
mod concierge;
mod page_machine;

pub use assistant_adapter::{
    AssistantReply, AssistantSessionAdapter, ASSISTANT_FALLBACK, PLACEHOLDER_API_KEY,
};
pub use concierge::ConciergeService;
pub use page_machine::{ActionOutcome, PageStateMachine, UserAction};
