use thiserror::Error;

/// Errors from the disk-backed cache stores.
#[derive(Error, Debug)]
pub enum CacheError {
    /// I/O failure reading or writing a store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Entry metadata that could not be encoded or decoded.
    #[error("invalid cache entry for '{url}': {source}")]
    Entry {
        /// Request URL the entry is keyed by.
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
