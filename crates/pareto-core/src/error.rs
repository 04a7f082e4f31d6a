//! Error types for Pareto density estimation
//!
//! Provides a unified error type for all pareto-stats crates.

use thiserror::Error;

/// Core error type for density estimation and shape classification
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Input could not be interpreted as a numeric sample
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    /// Input is type-valid but numerically unusable (e.g. all points identical
    /// where a positive distance is required)
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input(_operation: &str) -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for invalid quantile
    pub fn invalid_quantile(p: f64) -> Self {
        Self::InvalidParameter(format!("Quantile {p} must be in [0, 1]"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} contains NaN or infinite values"))
    }

    /// Create a type mismatch error for a non-numeric column or value
    pub fn type_mismatch(expected: &str, got: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.to_string(),
            got: got.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::type_mismatch("numeric", "text");
        assert_eq!(err.to_string(), "Type mismatch: expected numeric, got text");

        let err = Error::DegenerateInput("all points identical".to_string());
        assert_eq!(err.to_string(), "Degenerate input: all points identical");

        let err = Error::InvalidParameter("alpha must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: alpha must be positive");

        let err = Error::InsufficientData { expected: 10, actual: 5 };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 10 samples, got 5"
        );

        let err = Error::Computation("convergence failed".to_string());
        assert_eq!(err.to_string(), "Computation error: convergence failed");
    }

    #[test]
    fn test_error_helper_functions() {
        match Error::empty_input("density estimation") {
            Error::InsufficientData { expected, actual } => {
                assert_eq!(expected, 1);
                assert_eq!(actual, 0);
            }
            other => panic!("Wrong error type: {other:?}"),
        }

        let err = Error::invalid_quantile(1.5);
        assert_eq!(
            err.to_string(),
            "Invalid parameter: Quantile 1.5 must be in [0, 1]"
        );

        let err = Error::non_finite("pareto radius");
        assert_eq!(
            err.to_string(),
            "Computation error: pareto radius contains NaN or infinite values"
        );
    }

    #[test]
    fn test_error_chaining() {
        fn inner_function() -> Result<()> {
            Err(Error::Computation("inner error".to_string()))
        }

        fn outer_function() -> Result<()> {
            inner_function().map_err(|e| Error::DegenerateInput(format!("outer error: {e}")))
        }

        let err = outer_function().unwrap_err();
        assert!(err.to_string().contains("outer error"));
        assert!(err.to_string().contains("inner error"));
    }
}
