//! Error handling for the gizmo layer

use thiserror::Error;

#[cfg(feature = "tracing")]
use tracing::warn;

/// Result type for gizmo operations
pub type GizmoResult<T> = Result<T, GizmoError>;

/// Errors that can occur when setting up or driving a manipulation tool
#[derive(Error, Debug)]
pub enum GizmoError {
    /// The tool was aimed at a node the scene does not know about
    #[error("invalid manipulation target: {reason}")]
    InvalidTarget {
        /// Why the target was rejected
        reason: String,
    },
}

impl GizmoError {
    /// Create an invalid target error
    pub fn invalid_target(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        #[cfg(feature = "tracing")]
        warn!("invalid manipulation target: {}", reason);
        Self::InvalidTarget { reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GizmoError::invalid_target("node is not part of this scene");
        assert!(err.to_string().contains("not part of this scene"));
    }
}
