//! Worker lifecycle: install and activate.
//!
//! A worker moves through `Installing → Activating → Active` in order.
//! Install precaches the manifest as one atomic unit; activate prunes
//! every store whose name differs from the precache store's. Requests
//! are only served once active (see `fetch`).

use futures::future::try_join_all;
use tracing::{debug, info};

use crate::cache::storage::CacheStorage;
use crate::net::client::Fetch;
use crate::worker::{WorkerConfig, WorkerError};

/// Lifecycle states, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    /// Created; the manifest has not been precached yet.
    Installing,
    /// Precache complete; stale stores not yet pruned.
    Activating,
    /// Serving requests.
    Active,
}

/// The offline cache worker.
///
/// Owns the store registry and a network backend. Construction takes an
/// explicit [`WorkerConfig`] so store names never live as literals here.
pub struct CacheWorker<F: Fetch> {
    pub(crate) storage: CacheStorage,
    pub(crate) backend: F,
    pub(crate) config: WorkerConfig,
    pub(crate) state: WorkerState,
}

impl<F: Fetch> CacheWorker<F> {
    /// Create a worker in the `Installing` state.
    pub fn new(storage: CacheStorage, backend: F, config: WorkerConfig) -> Self {
        Self {
            storage,
            backend,
            config,
            state: WorkerState::Installing,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> WorkerState {
        self.state
    }

    /// The configuration this worker was built with.
    pub fn config(&self) -> &WorkerConfig {
        &self.config
    }

    /// The store registry this worker runs on.
    pub fn storage(&self) -> &CacheStorage {
        &self.storage
    }

    pub(crate) fn expect_state(&self, expected: WorkerState) -> Result<(), WorkerError> {
        if self.state != expected {
            return Err(WorkerError::InvalidState {
                expected,
                actual: self.state,
            });
        }
        Ok(())
    }

    /// Precache every manifest path into the precache store.
    ///
    /// The whole manifest is fetched concurrently and treated as a
    /// single unit: any transport failure or non-success status fails
    /// the install, the worker stays in `Installing`, and no entry is
    /// written. Responses are held in memory until the full set has
    /// resolved, then stored.
    pub async fn install(&mut self) -> Result<(), WorkerError> {
        self.expect_state(WorkerState::Installing)?;
        info!(
            store = %self.config.precache_name,
            assets = self.config.manifest.len(),
            "install: precaching manifest"
        );

        let fetches = self.config.manifest.iter().map(|path| self.backend.fetch(path));
        let responses = try_join_all(fetches).await?;

        for response in &responses {
            if !response.ok() {
                return Err(WorkerError::Precache {
                    url: response.url.clone(),
                    status: response.status,
                });
            }
        }

        let store = self.storage.open(&self.config.precache_name)?;
        for response in &responses {
            store.put(response)?;
        }

        self.state = WorkerState::Activating;
        info!("install complete");
        Ok(())
    }

    /// Delete every store whose name differs from the precache store's.
    ///
    /// Whole-store deletion by name mismatch is the only eviction in
    /// the system; the current store is never deleted. Transitions to
    /// `Active` on success.
    pub fn activate(&mut self) -> Result<(), WorkerError> {
        self.expect_state(WorkerState::Activating)?;

        for name in self.storage.keys()? {
            if name != self.config.precache_name {
                debug!(store = %name, "activate: deleting stale store");
                self.storage.delete(&name)?;
            }
        }

        self.state = WorkerState::Active;
        info!(store = %self.config.precache_name, "worker active");
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
