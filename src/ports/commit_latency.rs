//! Commit latency port.
//!
//! The ledger write is modelled as a latent external operation. The
//! acquisition waits on this port between staging and committing, so
//! tests can swap the real delay for an immediate one.

use async_trait::async_trait;
use std::time::Duration;

/// Waits out the ledger-write latency.
///
/// # Contract
///
/// Implementations must:
/// - Complete (never fail); there is no cancellation of a started commit
/// - Report the delay they apply through `duration()`
#[async_trait]
pub trait CommitLatency: Send + Sync {
    /// Resolves once the simulated write has settled.
    async fn settle(&self);

    /// The delay applied by `settle`.
    fn duration(&self) -> Duration;
}
