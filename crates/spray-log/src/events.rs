//! Events emitted by the stroke batcher for persistence observation.

/// Outcome of handing a batch to the transport.
///
/// Persistence is fire-and-forget from the painting path; these events are
/// the only way a host learns whether a flushed batch actually landed.
#[derive(Debug, Clone)]
pub enum BatchLogEvent {
    /// A batch was accepted by the write endpoint.
    BatchFlushed { token_count: usize },
    /// The write endpoint rejected or dropped a batch. The tokens were
    /// already evicted from the buffer and are not re-sent.
    FlushFailed { token_count: usize, reason: String },
}
