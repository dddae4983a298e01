//! The offline cache worker.
//!
//! A lifecycle state machine over the cache stores:
//!
//! - `lifecycle`: install (precache the manifest) and activate (prune
//!   stale stores)
//! - `fetch`: cache-first request serving with network fallback and
//!   write-back
//!
//! Store names and the manifest are passed in at construction rather
//! than read from module literals, so callers and tests control them.

pub mod fetch;
pub mod lifecycle;

pub use fetch::{FetchOutcome, FetchSource};
pub use lifecycle::{CacheWorker, WorkerState};

use thiserror::Error;

use crate::cache::error::CacheError;
use crate::net::error::FetchError;

/// Store names and the asset manifest a worker is built with.
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// Name of the precache store; a new name is a new generation, and
    /// activation deletes every store not carrying it.
    pub precache_name: String,
    /// Name of the store that grows as requests are observed.
    pub dynamic_name: String,
    /// Root-relative paths precached on install.
    pub manifest: Vec<String>,
}

/// Errors from the cache worker.
#[derive(Error, Debug)]
pub enum WorkerError {
    /// A manifest asset came back with a non-success status, failing
    /// the whole install.
    #[error("precache fetch for '{url}' returned status {status}")]
    Precache {
        /// Manifest path that failed.
        url: String,
        /// Status the backend returned.
        status: u16,
    },

    /// Transport failure, propagated to the caller untouched.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Failure in the underlying cache stores.
    #[error("cache storage error: {0}")]
    Storage(#[from] CacheError),

    /// A lifecycle method was called out of order.
    #[error("worker is {actual:?}, expected {expected:?}")]
    InvalidState {
        expected: WorkerState,
        actual: WorkerState,
    },
}

// ============================================================================
// Test support
// ============================================================================

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use bytes::Bytes;

    use crate::cache::store::CachedResponse;
    use crate::net::client::Fetch;
    use crate::net::error::FetchError;

    /// In-memory backend counting every fetch it serves.
    ///
    /// Unknown paths answer 404; paths marked unreachable fail at the
    /// transport level.
    pub(crate) struct StubFetch {
        assets: HashMap<String, (u16, Bytes)>,
        unreachable: HashSet<String>,
        calls: AtomicUsize,
    }

    impl StubFetch {
        pub(crate) fn new() -> Self {
            Self {
                assets: HashMap::new(),
                unreachable: HashSet::new(),
                calls: AtomicUsize::new(0),
            }
        }

        pub(crate) fn with_asset(mut self, path: &str, status: u16, body: &str) -> Self {
            self.assets
                .insert(path.to_string(), (status, Bytes::copy_from_slice(body.as_bytes())));
            self
        }

        pub(crate) fn with_unreachable(mut self, path: &str) -> Self {
            self.unreachable.insert(path.to_string());
            self
        }

        /// How many fetches have been served.
        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Fetch for StubFetch {
        async fn fetch(&self, path: &str) -> Result<CachedResponse, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            if self.unreachable.contains(path) {
                return Err(FetchError::Unreachable(path.to_string()));
            }
            match self.assets.get(path) {
                Some((status, body)) => {
                    Ok(CachedResponse::new(path, *status, None, body.clone()))
                }
                None => Ok(CachedResponse::new(path, 404, None, Bytes::new())),
            }
        }
    }
}
