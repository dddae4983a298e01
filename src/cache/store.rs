//! A single named cache store.
//!
//! Each store is a directory of entries keyed by request URL. An entry
//! is a metadata JSON sidecar plus a raw body file, both named by the
//! hex digest of the URL. A store holds at most one entry per URL;
//! `put` overwrites.

use std::path::PathBuf;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::cache::error::CacheError;

/// Extension of the metadata sidecar file.
const META_EXT: &str = "json";

/// Extension of the body payload file.
const BODY_EXT: &str = "bin";

/// A response held by a cache store.
///
/// `stored_at` records when the entry was written and is kept for
/// diagnostics only. Entries are served without any freshness check.
#[derive(Debug, Clone)]
pub struct CachedResponse {
    /// Request URL the response answers, used as the cache key.
    pub url: String,
    /// HTTP status code.
    pub status: u16,
    /// Content-Type header value, when the backend reported one.
    pub content_type: Option<String>,
    /// Response payload.
    pub body: Bytes,
    /// When the response was created or stored.
    pub stored_at: DateTime<Utc>,
}

impl CachedResponse {
    pub fn new(
        url: impl Into<String>,
        status: u16,
        content_type: Option<String>,
        body: Bytes,
    ) -> Self {
        Self {
            url: url.into(),
            status,
            content_type,
            body,
            stored_at: Utc::now(),
        }
    }

    /// Whether the status is in the success range.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// On-disk entry metadata; the body lives in the sidecar `.bin` file.
#[derive(Debug, Serialize, Deserialize)]
struct EntryMeta {
    url: String,
    status: u16,
    content_type: Option<String>,
    stored_at: DateTime<Utc>,
}

/// One named cache store.
pub struct CacheStore {
    name: String,
    dir: PathBuf,
}

impl CacheStore {
    pub(crate) fn new(name: String, dir: PathBuf) -> Self {
        Self { name, dir }
    }

    /// Name this store was opened under.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn entry_key(url: &str) -> String {
        hex::encode(Sha256::digest(url.as_bytes()))
    }

    fn meta_path(&self, url: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", Self::entry_key(url), META_EXT))
    }

    fn body_path(&self, url: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", Self::entry_key(url), BODY_EXT))
    }

    /// Look up the stored response for `url`. Returns `None` on a miss.
    pub fn lookup(&self, url: &str) -> Result<Option<CachedResponse>, CacheError> {
        let meta_path = self.meta_path(url);
        if !meta_path.exists() {
            debug!(store = %self.name, url, "cache miss");
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&meta_path)?;
        let meta: EntryMeta = serde_json::from_str(&contents).map_err(|source| {
            CacheError::Entry {
                url: url.to_string(),
                source,
            }
        })?;
        let body = std::fs::read(self.body_path(url))?;

        debug!(store = %self.name, url, bytes = body.len(), "cache hit");
        Ok(Some(CachedResponse {
            url: meta.url,
            status: meta.status,
            content_type: meta.content_type,
            body: Bytes::from(body),
            stored_at: meta.stored_at,
        }))
    }

    /// Store `response` under its URL, overwriting any previous entry.
    pub fn put(&self, response: &CachedResponse) -> Result<(), CacheError> {
        let meta = EntryMeta {
            url: response.url.clone(),
            status: response.status,
            content_type: response.content_type.clone(),
            stored_at: response.stored_at,
        };
        let contents = serde_json::to_string_pretty(&meta).map_err(|source| {
            CacheError::Entry {
                url: response.url.clone(),
                source,
            }
        })?;

        std::fs::write(self.meta_path(&response.url), contents)?;
        std::fs::write(self.body_path(&response.url), &response.body)?;

        debug!(store = %self.name, url = %response.url, bytes = response.body.len(), "entry stored");
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::storage::CacheStorage;

    fn open_store(root: &std::path::Path) -> CacheStore {
        let storage = CacheStorage::new(root).expect("storage root");
        storage.open("test-store").expect("open store")
    }

    #[test]
    fn test_lookup_miss_returns_none() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let store = open_store(tmp.path());

        assert!(store.lookup("/nope.html").expect("lookup").is_none());
    }

    #[test]
    fn test_put_then_lookup_roundtrip() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let store = open_store(tmp.path());

        let response = CachedResponse::new(
            "/index.html",
            200,
            Some("text/html".to_string()),
            Bytes::from_static(b"<html></html>"),
        );
        store.put(&response).expect("put");

        let found = store.lookup("/index.html").expect("lookup").expect("hit");
        assert_eq!(found.url, "/index.html");
        assert_eq!(found.status, 200);
        assert_eq!(found.content_type.as_deref(), Some("text/html"));
        assert_eq!(found.body, Bytes::from_static(b"<html></html>"));
    }

    #[test]
    fn test_put_overwrites_single_entry() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let store = open_store(tmp.path());

        let first = CachedResponse::new("/page.html", 200, None, Bytes::from_static(b"v1"));
        let second = CachedResponse::new("/page.html", 200, None, Bytes::from_static(b"v2"));
        store.put(&first).expect("put v1");
        store.put(&second).expect("put v2");

        let found = store.lookup("/page.html").expect("lookup").expect("hit");
        assert_eq!(found.body, Bytes::from_static(b"v2"));
    }

    #[test]
    fn test_distinct_urls_do_not_collide() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let store = open_store(tmp.path());

        let a = CachedResponse::new("/a/b", 200, None, Bytes::from_static(b"ab"));
        let b = CachedResponse::new("/a_b", 200, None, Bytes::from_static(b"a_b"));
        store.put(&a).expect("put a");
        store.put(&b).expect("put b");

        let found_a = store.lookup("/a/b").expect("lookup").expect("hit");
        let found_b = store.lookup("/a_b").expect("lookup").expect("hit");
        assert_eq!(found_a.body, Bytes::from_static(b"ab"));
        assert_eq!(found_b.body, Bytes::from_static(b"a_b"));
    }

    #[test]
    fn test_corrupt_metadata_is_reported() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let store = open_store(tmp.path());

        std::fs::write(store.meta_path("/bad.html"), "not json").expect("write garbage");

        let err = store.lookup("/bad.html").expect_err("corrupt entry");
        assert!(matches!(err, CacheError::Entry { ref url, .. } if url == "/bad.html"));
    }
}
