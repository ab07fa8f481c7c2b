//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors, state machine)
//! - `collection` - Owned items and the carbon-aggregating ledger
//! - `diagnostic` - The four-step questionnaire and its recommendation tree
//! - `acquisition` - Ownership form, certificate and the two-phase commit
//! - `conversation` - Append-only assistant history
//! - `session` - Page workflow and the `SessionContext` aggregate

pub mod acquisition;
pub mod collection;
pub mod conversation;
pub mod diagnostic;
pub mod foundation;
pub mod session;
