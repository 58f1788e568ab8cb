//! HTTP client for the spray persistence service.
//!
//! Implements the [`Transport`] contract over the two endpoints the service
//! exposes: `POST {base}/save_spray_data` with a `{"sprayCommands": [...]}`
//! body, and `GET {base}/api/fetch-spray-commands` returning the full batch
//! history as a JSON array of arrays.

use std::future::Future;

use serde::{Deserialize, Serialize};
use tracing::debug;

use spray_log::transport::{Transport, TransportError};
use spray_log::types::{Batch, BatchStream, Token};

/// JSON body accepted by the write endpoint.
#[derive(Debug, Serialize, Deserialize)]
struct SprayPayload {
    #[serde(rename = "sprayCommands")]
    spray_commands: Vec<Token>,
}

/// Client for a spray persistence service at a fixed base URL.
#[derive(Debug, Clone)]
pub struct RemoteStore {
    base_url: String,
    client: reqwest::Client,
}

impl RemoteStore {
    /// Create a client for the service at `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for RemoteStore {
    fn write_batch(
        &self,
        batch: Batch,
    ) -> impl Future<Output = Result<(), TransportError>> + Send {
        async move {
            let token_count = batch.len();
            let response = self
                .client
                .post(format!("{}/save_spray_data", self.base_url))
                .json(&SprayPayload {
                    spray_commands: batch,
                })
                .send()
                .await
                .map_err(|e| TransportError::Connection(e.to_string()))?;

            if !response.status().is_success() {
                return Err(TransportError::Rejected(response.status().to_string()));
            }

            debug!(token_count, "spray batch accepted by write endpoint");
            Ok(())
        }
    }

    fn fetch_all(&self) -> impl Future<Output = Result<BatchStream, TransportError>> + Send {
        async move {
            let response = self
                .client
                .get(format!("{}/api/fetch-spray-commands", self.base_url))
                .send()
                .await
                .map_err(|e| TransportError::Connection(e.to_string()))?;

            if !response.status().is_success() {
                return Err(TransportError::Rejected(response.status().to_string()));
            }

            let stream: BatchStream = response
                .json()
                .await
                .map_err(|e| TransportError::InvalidResponse(e.to_string()))?;

            debug!(batches = stream.len(), "fetched spray history");
            Ok(stream)
        }
    }
}
