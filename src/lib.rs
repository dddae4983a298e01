//! Offline-first cache and navigation shell for a static documentation
//! site.
//!
//! Two independent components that do not communicate:
//!
//! - [`nav`]: sidebar and active-item state for the site's navigation,
//!   driven by typed UI events over a typed page model.
//! - [`worker`]: the offline cache worker. It precaches an asset
//!   manifest into a named store, prunes stale stores on activation,
//!   then serves requests cache-first with network fallback and
//!   write-back, on top of the [`cache`] stores and the [`net`] fetch
//!   seam.
//!
//! [`config`] holds the file-backed settings both the worker stores and
//! the network origin come from.

pub mod cache;
pub mod config;
pub mod nav;
pub mod net;
pub mod worker;

pub use cache::{CacheError, CacheStorage, CacheStore, CachedResponse};
pub use config::Config;
pub use net::{Fetch, FetchError, HttpClient};
pub use worker::{CacheWorker, FetchOutcome, FetchSource, WorkerConfig, WorkerError, WorkerState};
