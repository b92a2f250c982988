//! Error types for the frameline core
//!
//! Failures in this crate fall into two camps: recoverable per-frame
//! degradations (a degenerate transform) and construction-time precondition
//! violations (a bad edit target). Neither is ever surfaced to the end user
//! as a dialog; callers either skip the frame or refuse the operation.

use thiserror::Error;

#[cfg(feature = "tracing")]
use tracing::{debug, warn};

/// Result type for frameline core operations
pub type FramelineResult<T> = Result<T, FramelineError>;

/// Errors that can occur in frameline core operations
#[derive(Error, Debug)]
pub enum FramelineError {
    /// The accumulated world transform cannot be inverted
    ///
    /// Raised when a node's world matrix is degenerate (for example a zero
    /// scale). Interactive callers treat this as "no edit this frame" rather
    /// than an error worth reporting.
    #[error("world transform is not invertible (determinant {determinant})")]
    NonInvertibleTransform {
        /// The offending determinant
        determinant: f32,
    },

    /// An operation was aimed at a node that cannot accept it
    #[error("invalid edit target: {reason}")]
    InvalidTarget {
        /// Why the target was rejected
        reason: String,
    },
}

impl FramelineError {
    /// Create a non-invertible transform error
    pub fn non_invertible(determinant: f32) -> Self {
        #[cfg(feature = "tracing")]
        debug!("world transform not invertible, determinant {}", determinant);
        Self::NonInvertibleTransform { determinant }
    }

    /// Create an invalid target error
    pub fn invalid_target(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        #[cfg(feature = "tracing")]
        warn!("invalid edit target: {}", reason);
        Self::InvalidTarget { reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FramelineError::non_invertible(0.0);
        assert!(err.to_string().contains("not invertible"));

        let err = FramelineError::invalid_target("layers cannot hold children");
        assert!(err.to_string().contains("layers cannot hold children"));
    }
}
