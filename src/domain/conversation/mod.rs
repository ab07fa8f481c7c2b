//! Conversation domain module.
//!
//! Role-tagged messages exchanged with the concierge, kept in an
//! append-only history owned by the session.

mod history;
mod message;

pub use history::Conversation;
pub use message::{Message, Role};
