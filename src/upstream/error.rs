//! Upstream error type.

use thiserror::Error;

/// Errors raised while fetching or decoding upstream data.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// HTTP transport failed
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The body was not valid CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The source could not serve the request
    #[error("{0}")]
    Unavailable(String),
}
