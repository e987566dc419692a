//! Error types for motion reconstruction.
//!
//! The numeric pipeline is total over its input samples, so nothing here is
//! raised by smoothing or integration. Errors come from configuration
//! validation, path comparison and record (de)serialization.

use thiserror::Error;

/// Main error type for reconstruction operations.
#[derive(Error, Debug)]
pub enum ReconstructionError {
    /// Configuration validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Two paths that must be index-aligned have different lengths.
    #[error("Length mismatch: expected {expected} points, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A capture session was finished without recording any samples.
    #[error("Capture session finished with no samples")]
    EmptyCapture,

    /// Record encoding or decoding failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for reconstruction operations.
pub type Result<T> = std::result::Result<T, ReconstructionError>;

impl ReconstructionError {
    /// Create an invalid configuration error.
    #[must_use]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a length mismatch error.
    #[must_use]
    pub const fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for ReconstructionError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
