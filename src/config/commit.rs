//! Acquisition commit configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

const MAX_LATENCY_MS: u64 = 30_000;

/// Simulated ledger-write settings
#[derive(Debug, Clone, Deserialize)]
pub struct CommitConfig {
    /// Delay between staging and committing, in milliseconds
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

impl CommitConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.latency_ms > MAX_LATENCY_MS {
            return Err(ValidationError::CommitLatencyTooLong);
        }
        Ok(())
    }
}

impl Default for CommitConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
        }
    }
}

fn default_latency_ms() -> u64 {
    2000
}
