//! Commit latency adapters.
//!
//! - `TokioCommitLatency` - Real timed wait on the tokio timer
//! - `ImmediateCommitLatency` - No wait, counts settlements (tests)

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::CommitLatency;

/// Waits a fixed duration on the tokio timer.
#[derive(Debug, Clone, Copy)]
pub struct TokioCommitLatency {
    duration: Duration,
}

impl TokioCommitLatency {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }
}

#[async_trait]
impl CommitLatency for TokioCommitLatency {
    async fn settle(&self) {
        sleep(self.duration).await;
    }

    fn duration(&self) -> Duration {
        self.duration
    }
}

/// Settles immediately.
#[derive(Debug, Default)]
pub struct ImmediateCommitLatency {
    settled: AtomicUsize,
}

impl ImmediateCommitLatency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completed `settle` calls.
    pub fn settled_count(&self) -> usize {
        self.settled.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CommitLatency for ImmediateCommitLatency {
    async fn settle(&self) {
        self.settled.fetch_add(1, Ordering::SeqCst);
    }

    fn duration(&self) -> Duration {
        Duration::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn tokio_latency_waits_the_configured_duration() {
        let latency = TokioCommitLatency::from_millis(20);
        let start = tokio::time::Instant::now();
        latency.settle().await;
        assert!(start.elapsed() >= Duration::from_millis(20));
        assert_eq!(latency.duration(), Duration::from_millis(20));
    }

    #[tokio::test]
    async fn immediate_latency_counts_settlements() {
        let latency = ImmediateCommitLatency::new();
        latency.settle().await;
        latency.settle().await;
        assert_eq!(latency.settled_count(), 2);
        assert_eq!(latency.duration(), Duration::ZERO);
    }
}
