//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Collaborator Ports
//!
//! - `CredentialVerifier` - Accepts or rejects login credentials
//! - `AssistantConnector` / `AssistantService` - Conversational concierge
//! - `PassportArtifactService` - QR-equivalent passport artifacts
//! - `CommitLatency` - Simulated ledger-write delay

mod assistant_service;
mod commit_latency;
mod credential_verifier;
mod passport_service;

pub use assistant_service::{AssistantConnector, AssistantError, AssistantService};
pub use commit_latency::CommitLatency;
pub use credential_verifier::CredentialVerifier;
pub use passport_service::{PassportArtifact, PassportArtifactService, PassportError};
