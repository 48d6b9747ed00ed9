//! Error handling for the RC filter engine and its request handlers.

use thiserror::Error;

/// Result type alias for rcfilter operations
pub type Result<T> = std::result::Result<T, RcFilterError>;

/// Main error type for rcfilter operations
#[derive(Error, Debug)]
pub enum RcFilterError {
    // Engine Errors
    #[error("{}", invalid_frequency_message(.frequency))]
    InvalidFrequency { frequency: Option<f64> },

    // Request Errors
    #[error("Unknown filter type: '{value}' (expected 'low-pass' or 'high-pass')")]
    UnknownTopology { value: String },

    #[error("Unknown endpoint: '{name}'")]
    UnknownEndpoint { name: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn invalid_frequency_message(frequency: &Option<f64>) -> String {
    match frequency {
        Some(f) => format!("Invalid frequency: {} Hz (must be a finite value > 0)", f),
        None => "Invalid frequency: no frequency given".to_string(),
    }
}

impl RcFilterError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            RcFilterError::InvalidFrequency { .. } => "INVALID_FREQUENCY",
            RcFilterError::UnknownTopology { .. } => "UNKNOWN_TOPOLOGY",
            RcFilterError::UnknownEndpoint { .. } => "UNKNOWN_ENDPOINT",
            RcFilterError::Io(_) => "IO_ERROR",
            RcFilterError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if this error is recoverable by correcting the input
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            RcFilterError::InvalidFrequency { .. }
                | RcFilterError::UnknownTopology { .. }
                | RcFilterError::UnknownEndpoint { .. }
                | RcFilterError::Serialization(_)
        )
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            RcFilterError::InvalidFrequency { .. } => vec![
                "Enter a frequency greater than 0 Hz",
                "The cutoff frequency of this circuit is about 1591.55 Hz",
            ],
            RcFilterError::UnknownTopology { .. } => {
                vec!["Supported filter types: low-pass, high-pass"]
            }
            RcFilterError::UnknownEndpoint { .. } => {
                vec!["Available endpoints: rc-gain, sweep, health"]
            }
            RcFilterError::Serialization(_) => vec![
                "Check the request body is valid JSON",
                "Expected fields: frequency (number), filter_type (string)",
            ],
            RcFilterError::Io(_) => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = RcFilterError::InvalidFrequency {
            frequency: Some(0.0),
        };
        assert_eq!(err.error_code(), "INVALID_FREQUENCY");

        let err = RcFilterError::UnknownTopology {
            value: "band-pass".to_string(),
        };
        assert_eq!(err.error_code(), "UNKNOWN_TOPOLOGY");
    }

    #[test]
    fn test_recovery_suggestions() {
        let err = RcFilterError::InvalidFrequency { frequency: None };
        assert!(!err.recovery_suggestions().is_empty());
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_input_errors_are_recoverable() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let errors = [
            RcFilterError::InvalidFrequency { frequency: Some(0.0) },
            RcFilterError::UnknownTopology {
                value: "notch".to_string(),
            },
            RcFilterError::UnknownEndpoint {
                name: "phase".to_string(),
            },
            RcFilterError::Serialization(bad_json),
        ];
        for err in errors {
            assert!(err.is_recoverable(), "{} should be recoverable", err.error_code());
            assert!(!err.recovery_suggestions().is_empty());
        }

        let io = RcFilterError::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(!io.is_recoverable());
    }

    #[test]
    fn test_invalid_frequency_message() {
        let err = RcFilterError::InvalidFrequency {
            frequency: Some(-1.0),
        };
        assert!(err.to_string().contains("-1 Hz"));

        let err = RcFilterError::InvalidFrequency { frequency: None };
        assert!(err.to_string().contains("no frequency"));
    }
}
