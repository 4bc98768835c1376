//! Error types for the vaunt engine.
//!
//! Contract mismatches are not errors: they are reported as diagnostics on a
//! failed [`ValidationResult`](crate::core::ValidationResult). The types here
//! cover the cases that abort a call outright: broken comparator setup,
//! runaway schema depth, and the representation I/O done outside the engine.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, VauntError>;

/// The main error type for vaunt operations.
#[derive(Debug, Error)]
pub enum VauntError {
    /// A comparator broke an internal invariant.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Schema comparison descended past the configured depth limit.
    #[error("Schema depth limit of {limit} exceeded at {path}")]
    DepthLimitExceeded {
        /// The configured limit.
        limit: usize,
        /// Rendered property path where the limit was hit.
        path: String,
    },

    /// A service name that cannot be used as a representation file name.
    #[error("Invalid service name {0:?}: expected a single file name component")]
    InvalidServiceName(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl VauntError {
    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true for errors that signal a broken engine rather than bad input.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal(_) | Self::DepthLimitExceeded { .. })
    }
}

impl From<serde_json::Error> for VauntError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_error_display() {
        let err = VauntError::internal("comparator returned no verdict");
        assert_eq!(err.to_string(), "Internal error: comparator returned no verdict");
        assert!(err.is_internal());
    }

    #[test]
    fn test_depth_limit_display() {
        let err = VauntError::DepthLimitExceeded {
            limit: 3,
            path: "$.a.b.c.d".to_string(),
        };
        assert!(err.to_string().contains("limit of 3"));
        assert!(err.to_string().contains("$.a.b.c.d"));
        assert!(err.is_internal());
    }

    #[test]
    fn test_invalid_service_name_display() {
        let err = VauntError::InvalidServiceName("../escape".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid service name \"../escape\": expected a single file name component"
        );
        assert!(!err.is_internal());
    }

    #[test]
    fn test_serde_error_converts() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: VauntError = parse_err.into();
        assert!(matches!(err, VauntError::Serialization(_)));
        assert!(!err.is_internal());
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        let err: VauntError = io.into();
        assert!(err.to_string().starts_with("IO error"));
    }
}
