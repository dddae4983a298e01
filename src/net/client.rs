//! The network backend behind the fetch seam.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::cache::store::CachedResponse;
use crate::net::error::FetchError;

/// A backend that resolves a root-relative path to a response.
///
/// The worker talks to the network only through this trait, so tests
/// substitute an in-memory backend for the HTTP client.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetch `path` and return the response, whatever its status.
    ///
    /// Errors are transport failures only.
    async fn fetch(&self, path: &str) -> Result<CachedResponse, FetchError>;
}

#[async_trait]
impl<F: Fetch + ?Sized> Fetch for Arc<F> {
    async fn fetch(&self, path: &str) -> Result<CachedResponse, FetchError> {
        (**self).fetch(path).await
    }
}

/// HTTP fetch against a fixed origin.
///
/// No request timeout is configured anywhere: a request that hangs
/// leaves its future pending, and nothing in the system cancels it.
pub struct HttpClient {
    client: reqwest::Client,
    origin: String,
}

impl HttpClient {
    /// Create a client resolving paths against `origin`
    /// (scheme and authority, e.g. `https://docs.example.net`).
    pub fn new(origin: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            origin: origin.into(),
        })
    }

    fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.origin.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl Fetch for HttpClient {
    async fn fetch(&self, path: &str) -> Result<CachedResponse, FetchError> {
        let url = self.url_for(path);
        debug!(%url, "network fetch");

        let response = self.client.get(&url).send().await?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?;

        Ok(CachedResponse::new(path, status, content_type, body))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_joins_origin_and_path() {
        let client = HttpClient::new("https://docs.example.net/").expect("client");

        assert_eq!(client.url_for("/"), "https://docs.example.net/");
        assert_eq!(
            client.url_for("/index.html"),
            "https://docs.example.net/index.html"
        );
        assert_eq!(
            client.url_for("guide.html"),
            "https://docs.example.net/guide.html"
        );
    }
}
