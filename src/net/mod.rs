//! Network access for the offline worker.
//!
//! - `client`: the `Fetch` seam and the reqwest-backed `HttpClient`
//! - `error`: transport error taxonomy

pub mod client;
pub mod error;

pub use client::{Fetch, HttpClient};
pub use error::FetchError;
