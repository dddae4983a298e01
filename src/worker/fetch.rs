//! Cache-first request serving.

use tracing::debug;

use crate::cache::store::CachedResponse;
use crate::net::client::Fetch;
use crate::worker::lifecycle::{CacheWorker, WorkerState};
use crate::worker::WorkerError;

/// Which path produced a served response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchSource {
    /// Answered from the dynamic store, no network call.
    Cache,
    /// Fetched from the network and written back.
    Network,
}

/// A served response plus where it came from.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub response: CachedResponse,
    pub source: FetchSource,
}

impl<F: Fetch> CacheWorker<F> {
    /// Serve `path` cache-first from the dynamic store.
    ///
    /// A hit is returned as stored, with no freshness check. On a miss,
    /// one network fetch runs; its response is written back for future
    /// hits, whatever its status, and returned. A transport failure
    /// propagates to the caller and nothing is written; there is no
    /// offline fallback.
    pub async fn serve(&self, path: &str) -> Result<FetchOutcome, WorkerError> {
        self.expect_state(WorkerState::Active)?;

        let store = self.storage.open(&self.config.dynamic_name)?;
        if let Some(response) = store.lookup(path)? {
            debug!(url = path, "serving from cache");
            return Ok(FetchOutcome {
                response,
                source: FetchSource::Cache,
            });
        }

        let response = self.backend.fetch(path).await?;
        store.put(&response)?;
        debug!(url = path, status = response.status, "fetched and stored");
        Ok(FetchOutcome {
            response,
            source: FetchSource::Network,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
