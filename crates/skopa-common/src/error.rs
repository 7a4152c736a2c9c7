//! Unified error types for the skopa workspace.
//!
//! Probe-internal I/O failures never surface through this type: a missing
//! pseudo-file is an informative result, reported as a finding. Errors here
//! are reserved for operations that genuinely cannot proceed, such as an
//! unknown check id or a failed process enumeration.

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum SkopaError {
    /// A required resource was not found.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Type of the missing resource.
        kind: &'static str,
        /// Identifier of the missing resource.
        id: String,
    },

    /// Enumerating processes failed entirely.
    #[error("process listing failed: {message}")]
    ProcessListing {
        /// Description of the failure.
        message: String,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, SkopaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_their_context() {
        let err = SkopaError::NotFound {
            kind: "check",
            id: "security.bogus".to_string(),
        };
        assert_eq!(err.to_string(), "check not found: security.bogus");

        let err = SkopaError::ProcessListing {
            message: "no processes visible".to_string(),
        };
        assert_eq!(err.to_string(), "process listing failed: no processes visible");
    }
}
