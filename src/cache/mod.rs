//! Disk-backed cache stores for offline asset access.
//!
//! This module provides the storage layer the offline worker runs on:
//!
//! - `storage`: the registry of named stores (open, enumerate, delete)
//! - `store`: one named store of URL-keyed response entries
//! - `error`: the cache error taxonomy
//!
//! Two stores exist in practice: a precache replaced wholesale per
//! generation, and a dynamic store that grows as requests are observed.

pub mod error;
pub mod storage;
pub mod store;

pub use error::CacheError;
pub use storage::CacheStorage;
pub use store::{CacheStore, CachedResponse};
