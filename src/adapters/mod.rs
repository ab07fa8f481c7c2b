//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Assistant connectors (Mistral, mock)
//! - `auth` - Credential verifiers (shared secret, mock)
//! - `http` - REST API over the concierge service
//! - `latency` - Commit latency (tokio timer, immediate)
//! - `passport` - Passport artifact rendering (QR code URL)

pub mod ai;
pub mod auth;
pub mod http;
pub mod latency;
pub mod passport;

pub use ai::{MistralConfig, MistralConnector, MockAssistantConnector};
pub use auth::{MockCredentialVerifier, SharedSecretVerifier};
pub use http::app_router;
pub use latency::{ImmediateCommitLatency, TokioCommitLatency};
pub use passport::QrPassportService;
