//! Spray stroke log - command encoding and batched replay
//!
//! This crate provides the core pipeline for recording a spray-paint drawing
//! as a compact, replayable command log:
//! - [`types::SprayCommand`] - one spray sample (position, radius, density, color)
//! - [`codec`] - token wire format encoding/decoding
//! - [`batcher`] - threshold-based batching of live input
//! - [`replay`] - paced, ordered replay of stored batches
//! - [`transport`] - contract for the write/fetch persistence endpoints
//!
//! The dot-rendering primitive and the toolbar UI live in the host
//! application; this crate only moves commands between pointer input and
//! storage and back.

pub mod batcher;
pub mod codec;
pub mod config;
pub mod constants;
pub mod events;
pub mod replay;
pub mod transport;
pub mod types;

pub use batcher::*;
pub use codec::*;
pub use config::*;
pub use constants::*;
pub use events::*;
pub use replay::*;
pub use transport::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::{Arc, Mutex};
    use tokio::sync::mpsc;

    /// In-memory stand-in for the persistence service.
    struct MemoryStore {
        batches: Mutex<BatchStream>,
        written: mpsc::UnboundedSender<usize>,
    }

    impl Transport for MemoryStore {
        fn write_batch(
            &self,
            batch: Batch,
        ) -> impl Future<Output = Result<(), TransportError>> + Send {
            let token_count = batch.len();
            self.batches.lock().unwrap().push(batch);
            let _ = self.written.send(token_count);
            async { Ok(()) }
        }

        fn fetch_all(&self) -> impl Future<Output = Result<BatchStream, TransportError>> + Send {
            let stream = self.batches.lock().unwrap().clone();
            async move { Ok(stream) }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn recorded_session_replays_identically() {
        let (written_tx, mut written_rx) = mpsc::unbounded_channel();
        let store = Arc::new(MemoryStore {
            batches: Mutex::new(Vec::new()),
            written: written_tx,
        });

        let drawn: Vec<SprayCommand> = (0..60)
            .map(|i| SprayCommand {
                x: i * 3,
                y: i,
                radius: 20,
                density: 20,
                color: SprayColor::ALL[(i % 4) as usize],
            })
            .collect();

        let mut batcher = StrokeBatcher::new(Arc::clone(&store));
        for command in &drawn[..50] {
            batcher.record(command);
        }
        assert_eq!(written_rx.recv().await, Some(50));

        for command in &drawn[50..] {
            batcher.record(command);
        }
        // Session end: the 10 tokens past the threshold flush here.
        batcher.flush();
        assert_eq!(written_rx.recv().await, Some(10));

        let stream = store.fetch_all().await.unwrap();
        assert_eq!(stream.len(), 2);

        let mut painted = Vec::new();
        ReplayScheduler::new()
            .replay(stream, |command| painted.push(command))
            .await;

        assert_eq!(painted, drawn);
    }
}
