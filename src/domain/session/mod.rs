//! Session domain module.
//!
//! The page workflow and the `SessionContext` aggregate it drives. A
//! context exists from start-up on the login page; signing in binds the
//! identity, and logging out replaces the whole context.

mod context;
mod errors;
mod identity;
mod page;

pub use context::{SessionContext, SessionSnapshot};
pub use errors::WorkflowError;
pub use identity::Identity;
pub use page::{PageState, Trigger};
