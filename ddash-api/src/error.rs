/// Error types for the dashboard API client
use thiserror::Error;

/// Terminal failure of a fetch attempt, surfaced after retries are exhausted.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Network-level failure or response body decode failure
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response from the API
    #[error("API error: {status} {status_text} - {body}")]
    Status {
        status: u16,
        status_text: String,
        body: String,
    },
}

/// Type alias for Results using TransportError
pub type Result<T> = std::result::Result<T, TransportError>;
