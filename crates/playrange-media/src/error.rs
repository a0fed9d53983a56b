//! Error types for playrange-media.

use thiserror::Error;

/// Result type for playrange-media operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for reading buffered ranges from a media source.
#[derive(Debug, Error)]
pub enum Error {
    /// The media source cannot report its buffered ranges (detached, torn down, ...).
    #[error("Buffered ranges unavailable: {0}")]
    RangeUnavailable(String),

    /// The provider advertised a range it could not return.
    #[error("Invalid buffered range at index {index}: start={start:?}, end={end:?}")]
    InvalidRange {
        index: usize,
        start: Option<f64>,
        end: Option<f64>,
    },
}

impl Error {
    /// Create a range-unavailable error.
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::RangeUnavailable(msg.into())
    }
}
