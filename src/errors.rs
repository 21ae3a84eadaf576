// Copyright 2025 Cowboy AI, LLC.

//! Error types for mixin operations
//!
//! Composition errors never show up here: a mixin list that the base sequence
//! cannot support is rejected by the type checker. What remains are the
//! runtime failures of checked element access and JSON conversion.

use thiserror::Error;

/// Errors that can occur when working with a composed sequence
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MixinError {
    /// Checked access past the end of the sequence
    #[error("Index out of bounds: index {index} but length is {len}")]
    IndexOutOfBounds {
        /// Requested position
        index: usize,
        /// Length of the sequence at the time of access
        len: usize,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type for mixin operations
pub type MixinResult<T> = Result<T, MixinError>;

#[cfg(feature = "json")]
impl From<serde_json::Error> for MixinError {
    fn from(err: serde_json::Error) -> Self {
        MixinError::SerializationError(err.to_string())
    }
}

impl MixinError {
    /// Create an out-of-bounds error
    pub fn out_of_bounds(index: usize, len: usize) -> Self {
        MixinError::IndexOutOfBounds { index, len }
    }

    /// Check if this is an out-of-bounds error
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, MixinError::IndexOutOfBounds { .. })
    }
}
