//! Credential verifier adapters.
//!
//! - `SharedSecretVerifier` - Single configured secret, constant-time check
//! - `MockCredentialVerifier` - Identity map for testing

mod mock;
mod shared_secret;

pub use mock::MockCredentialVerifier;
pub use shared_secret::SharedSecretVerifier;
