//! Error types for ratefetch.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for ratefetch operations.
pub type Result<T> = std::result::Result<T, RateError>;

/// Errors that can occur while fetching, decoding and querying series.
#[derive(Error, Debug)]
pub enum RateError {
    /// The server answered with a non-success status.
    #[error("Query failed: HTTP {status} from {url}")]
    Request {
        /// HTTP status code.
        status: u16,
        /// The requested URL, without query parameters.
        url: String,
    },

    /// The HTTP transport itself failed (connection, TLS, timeout).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body does not have the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),

    /// No observation exists on or before the requested date.
    #[error("No {column} observation on or before {date}")]
    NotFound {
        /// Value column of the queried series.
        column: String,
        /// The target date.
        date: NaiveDate,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output format error.
    #[error("Format error: {0}")]
    Format(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RateError {
    /// Builds a [`RateError::Parse`] from anything printable.
    pub fn parse(msg: impl std::fmt::Display) -> Self {
        Self::Parse(msg.to_string())
    }
}
