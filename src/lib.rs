//! ELVIA Concierge - Guided Retail Acquisition
//!
//! This crate implements a signed-in collector's journey: a four-step
//! diagnostic recommends a piece, an ownership form commits it to the
//! collection ledger with a carbon-tracked certificate, and a conversational
//! concierge answers questions along the way.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
