//! Error types for the AM chain.

use thiserror::Error;

/// Result type for AM chain operations.
pub type AmResult<T> = Result<T, AmError>;

/// Errors that can occur while building or running the chain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AmError {
    /// A configuration or stage parameter lies outside its documented domain.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// What was wrong with it, including the offending value.
        reason: String,
    },

    /// Two arrays that share the time grid disagree in length.
    #[error("length mismatch at {stage}: expected {expected} samples, got {actual}")]
    LengthMismatch {
        /// Stage boundary where the mismatch was caught.
        stage: &'static str,
        /// Length of the time grid.
        expected: usize,
        /// Length that arrived.
        actual: usize,
    },
}

impl AmError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        AmError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Fail with [`AmError::LengthMismatch`] unless `actual == expected`.
pub fn ensure_len(stage: &'static str, expected: usize, actual: usize) -> AmResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(AmError::LengthMismatch {
            stage,
            expected,
            actual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_len_accepts_equal() {
        assert!(ensure_len("modulator", 16, 16).is_ok());
    }

    #[test]
    fn test_ensure_len_reports_both_lengths() {
        let err = ensure_len("channel", 16, 15).unwrap_err();
        assert_eq!(
            err,
            AmError::LengthMismatch {
                stage: "channel",
                expected: 16,
                actual: 15
            }
        );
        assert_eq!(
            err.to_string(),
            "length mismatch at channel: expected 16 samples, got 15"
        );
    }

    #[test]
    fn test_invalid_parameter_message() {
        let err = AmError::invalid("sample_rate", "must be > 0, got -1");
        assert_eq!(
            err.to_string(),
            "invalid parameter 'sample_rate': must be > 0, got -1"
        );
    }
}
