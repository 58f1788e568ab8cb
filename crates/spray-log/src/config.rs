//! Tunable parameters for batching and replay pacing.
//!
//! The defaults (50 tokens, 200 ms) match the original deployment but are
//! plain configuration, not invariants.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BATCH_DELAY_MS, DEFAULT_FLUSH_THRESHOLD};

/// Batching behavior for live input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatcherConfig {
    /// Token count that triggers an automatic flush.
    pub flush_threshold: usize,
}

impl Default for BatcherConfig {
    fn default() -> Self {
        Self {
            flush_threshold: DEFAULT_FLUSH_THRESHOLD,
        }
    }
}

/// Pacing behavior for replay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayConfig {
    /// Pause before the first batch and after each batch, in milliseconds.
    pub batch_delay_ms: u64,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            batch_delay_ms: DEFAULT_BATCH_DELAY_MS,
        }
    }
}

impl ReplayConfig {
    /// Pacing delay as a `Duration`.
    pub fn batch_delay(&self) -> Duration {
        Duration::from_millis(self.batch_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        assert_eq!(BatcherConfig::default().flush_threshold, 50);
        assert_eq!(ReplayConfig::default().batch_delay(), Duration::from_millis(200));
    }
}
