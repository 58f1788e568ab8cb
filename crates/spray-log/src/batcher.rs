//! Threshold-based batching of live spray input.

use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use crate::codec;
use crate::config::BatcherConfig;
use crate::events::BatchLogEvent;
use crate::transport::Transport;
use crate::types::{SprayCommand, Token};

type Listeners = Arc<RwLock<Vec<Box<dyn Fn(BatchLogEvent) + Send + Sync>>>>;

/// Accumulates encoded spray commands and flushes them in batches.
///
/// The batcher exclusively owns the pending token buffer; once a buffer is
/// handed to the transport it is no longer referenced here. `record` is
/// synchronous and only the persistence call runs on a spawned task, so the
/// painting path never waits on the network. Each canvas gets its own
/// batcher instance.
pub struct StrokeBatcher<T> {
    config: BatcherConfig,
    transport: Arc<T>,
    /// Tokens recorded since the last flush, in draw order.
    buffer: Vec<Token>,
    /// Listeners observing flush outcomes from the background task.
    event_listeners: Listeners,
}

impl<T> std::fmt::Debug for StrokeBatcher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let listener_count = self.event_listeners.read().map(|l| l.len()).unwrap_or(0);
        f.debug_struct("StrokeBatcher")
            .field("pending", &self.buffer.len())
            .field("flush_threshold", &self.config.flush_threshold)
            .field("listener_count", &listener_count)
            .finish()
    }
}

impl<T: Transport + 'static> StrokeBatcher<T> {
    /// Create a batcher with the default flush threshold.
    pub fn new(transport: Arc<T>) -> Self {
        Self::with_config(transport, BatcherConfig::default())
    }

    /// Create a batcher with an explicit configuration.
    pub fn with_config(transport: Arc<T>, config: BatcherConfig) -> Self {
        Self {
            config,
            transport,
            buffer: Vec::new(),
            event_listeners: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Encode a command and append it to the pending buffer.
    ///
    /// Reaching the flush threshold triggers a flush in the same logical
    /// step; the caller keeps painting without waiting on it.
    pub fn record(&mut self, command: &SprayCommand) {
        self.buffer.push(codec::encode(command));
        if self.buffer.len() >= self.config.flush_threshold {
            self.flush();
        }
    }

    /// Hand the pending buffer to the transport and reset it.
    ///
    /// No-op when the buffer is empty. Must be called on any session-ending
    /// event so a partial batch is not lost. A failed write is logged and
    /// reported through the event listeners; the tokens are not re-buffered.
    pub fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }

        let batch = std::mem::take(&mut self.buffer);
        let token_count = batch.len();
        let transport = Arc::clone(&self.transport);
        let listeners = Arc::clone(&self.event_listeners);

        tokio::spawn(async move {
            match transport.write_batch(batch).await {
                Ok(()) => {
                    debug!(token_count, "spray batch persisted");
                    emit(&listeners, BatchLogEvent::BatchFlushed { token_count });
                }
                Err(err) => {
                    warn!(token_count, error = %err, "spray batch write failed, tokens dropped");
                    emit(
                        &listeners,
                        BatchLogEvent::FlushFailed {
                            token_count,
                            reason: err.to_string(),
                        },
                    );
                }
            }
        });
    }

    /// Number of tokens waiting for the next flush.
    pub fn pending_len(&self) -> usize {
        self.buffer.len()
    }

    /// Register a listener for flush outcomes.
    pub fn add_event_listener<F>(&self, listener: F)
    where
        F: Fn(BatchLogEvent) + Send + Sync + 'static,
    {
        let mut listeners = self
            .event_listeners
            .write()
            .expect("StrokeBatcher lock poisoned");
        listeners.push(Box::new(listener));
    }
}

fn emit(listeners: &Listeners, event: BatchLogEvent) {
    let listeners = listeners.read().expect("StrokeBatcher lock poisoned");
    for listener in listeners.iter() {
        listener(event.clone());
    }
}
