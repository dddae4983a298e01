use thiserror::Error;

/// Errors from the network backend.
///
/// These are transport failures only. A response with a non-success
/// HTTP status is not an error at this layer; it is returned to the
/// caller as a response.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Failure from the HTTP client.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend could not be reached at all.
    #[error("network unreachable: {0}")]
    Unreachable(String),
}
