//! Mock credential verifier for testing.
//!
//! # Example
//!
//! ```ignore
//! let verifier = MockCredentialVerifier::new()
//!     .with_user("yannick.v@maison.com", "secret");
//!
//! assert!(verifier.verify("yannick.v@maison.com", &Secret::new("secret".into())).await);
//! ```

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};

use crate::ports::CredentialVerifier;

/// Mock verifier holding an identity → secret map.
///
/// Identities not in the map are rejected unless `accepting_all` is set.
#[derive(Debug, Default)]
pub struct MockCredentialVerifier {
    users: RwLock<HashMap<String, String>>,
    accept_all: bool,
    calls: AtomicUsize,
}

impl MockCredentialVerifier {
    /// Creates a verifier that rejects everyone.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a verifier that accepts any credentials.
    pub fn accepting_all() -> Self {
        Self {
            accept_all: true,
            ..Self::default()
        }
    }

    /// Registers an identity with its secret.
    pub fn with_user(self, identity: impl Into<String>, secret: impl Into<String>) -> Self {
        self.add_user(identity, secret);
        self
    }

    /// Registers an identity at runtime.
    pub fn add_user(&self, identity: impl Into<String>, secret: impl Into<String>) {
        self.users
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(identity.into(), secret.into());
    }

    /// Number of `verify` calls made.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CredentialVerifier for MockCredentialVerifier {
    async fn verify(&self, identity: &str, secret: &Secret<String>) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.accept_all {
            return true;
        }
        self.users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(identity)
            .map(|expected| expected == secret.expose_secret())
            .unwrap_or(false)
    }
}
