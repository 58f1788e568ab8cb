//! Paced replay of stored spray batches.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::time::sleep;
use tracing::{debug, warn};

use crate::codec;
use crate::config::ReplayConfig;
use crate::types::{BatchStream, SprayCommand};

/// Cancellation handle for an in-flight replay.
///
/// The flag is checked before every pacing delay, so cancelling from session
/// teardown never leaves a batch half painted.
#[derive(Debug, Clone, Default)]
pub struct ReplayCancel {
    cancelled: Arc<AtomicBool>,
}

impl ReplayCancel {
    /// Stop the replay before its next pacing delay.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Replays a fetched batch history in order with inter-batch pacing.
///
/// `replay` consumes the scheduler, so a replay cannot be restarted; fetch
/// the history again for a fresh one.
#[derive(Debug, Default)]
pub struct ReplayScheduler {
    config: ReplayConfig,
    cancel: ReplayCancel,
}

impl ReplayScheduler {
    /// Create a scheduler with the default pacing delay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scheduler with an explicit configuration.
    pub fn with_config(config: ReplayConfig) -> Self {
        Self {
            config,
            cancel: ReplayCancel::default(),
        }
    }

    /// Handle for stopping this replay from an enclosing teardown.
    pub fn cancel_handle(&self) -> ReplayCancel {
        self.cancel.clone()
    }

    /// Replay every batch in stream order, invoking `paint_one` per decoded
    /// command.
    ///
    /// An initial pacing delay lets the target surface finish setup; the
    /// same delay follows every batch, producing the staged redraw. Within a
    /// batch tokens replay in stored order and batches replay strictly in
    /// stream order. Tokens that fail to decode are skipped and logged so a
    /// single corrupt entry cannot abort the rest of the drawing.
    pub async fn replay<F>(self, stream: BatchStream, mut paint_one: F)
    where
        F: FnMut(SprayCommand),
    {
        let delay = self.config.batch_delay();

        if self.cancel.is_cancelled() {
            return;
        }
        sleep(delay).await;

        for (batch_index, batch) in stream.into_iter().enumerate() {
            for token in &batch {
                match codec::decode(token) {
                    Ok(command) => paint_one(command),
                    Err(err) => {
                        warn!(batch_index, token = %token, error = %err, "skipping undecodable spray token");
                    }
                }
            }

            debug!(batch_index, tokens = batch.len(), "spray batch replayed");

            if self.cancel.is_cancelled() {
                debug!(batch_index, "replay cancelled");
                return;
            }
            sleep(delay).await;
        }
    }
}
