//! Result and error types for the harness.

use thiserror::Error;

/// Result type for harness operations
pub type HarnessResult<T> = Result<T, HarnessError>;

/// Errors that can occur while driving a scenario
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The local asset origin could not acquire its listening endpoint.
    /// Fatal for the attempt; never retried.
    #[error("Failed to bind local asset origin: {message}")]
    Bind {
        /// Error message
        message: String,
    },

    /// An expected UI condition was absent
    #[error("Verification failed: expected {expected}")]
    Verification {
        /// Description of the expected condition
        expected: String,
    },

    /// An action could not complete within the wait bound
    #[error("Navigation failed: {action} (waited {waited_ms}ms)")]
    Navigation {
        /// Description of the attempted action
        action: String,
        /// Time spent polling before giving up
        waited_ms: u64,
    },

    /// Invalid settings or flags; retrying cannot fix this
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HarnessError {
    /// Whether a fresh attempt could plausibly succeed.
    ///
    /// Verification and navigation failures are the flaky-UI class the
    /// retry executor exists for. Bind, configuration and I/O errors
    /// invalidate the fixture itself and always propagate immediately.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Verification { .. } | Self::Navigation { .. })
    }

    /// Shorthand for a verification failure
    #[must_use]
    pub fn verification(expected: impl Into<String>) -> Self {
        Self::Verification {
            expected: expected.into(),
        }
    }

    /// Shorthand for a navigation failure
    #[must_use]
    pub fn navigation(action: impl Into<String>, waited_ms: u64) -> Self {
        Self::Navigation {
            action: action.into(),
            waited_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(HarnessError::verification("wordmark visible").is_retryable());
        assert!(HarnessError::navigation("tap tab counter", 2000).is_retryable());
        assert!(!HarnessError::Bind {
            message: "address in use".into()
        }
        .is_retryable());
        assert!(!HarnessError::Configuration {
            message: "bad flags".into()
        }
        .is_retryable());
        let io = HarnessError::from(std::io::Error::other("boom"));
        assert!(!io.is_retryable());
    }

    #[test]
    fn test_display_carries_detail() {
        let err = HarnessError::verification("jump-back-in section displayed");
        assert!(err.to_string().contains("jump-back-in section displayed"));

        let err = HarnessError::navigation("open page", 1500);
        let msg = err.to_string();
        assert!(msg.contains("open page"));
        assert!(msg.contains("1500"));
    }
}
