//! Contract for the persistence endpoints.
//!
//! Storage itself is an opaque append/fetch service; this module only fixes
//! the shape of the two calls the pipeline makes against it.

use std::future::Future;

use thiserror::Error;

use crate::types::{Batch, BatchStream};

/// Error type for write/fetch calls against the persistence service.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connection(String),

    #[error("request rejected: {0}")]
    Rejected(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Write and read sides of the spray persistence service.
///
/// Futures must be `Send` because batch flushes run on a spawned task.
/// A write failure is non-fatal to the painting path; a fetch failure means
/// the load path degrades to an empty drawing.
pub trait Transport: Send + Sync {
    /// Persist one batch. Calls arrive in the temporal order batches were
    /// completed.
    fn write_batch(&self, batch: Batch)
    -> impl Future<Output = Result<(), TransportError>> + Send;

    /// Fetch the full ordered batch history. No pagination; the endpoint
    /// returns everything every time.
    fn fetch_all(&self) -> impl Future<Output = Result<BatchStream, TransportError>> + Send;
}
