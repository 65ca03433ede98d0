//! Unified converter error types.

use thiserror::Error;

/// Top-level converter error.
#[derive(Error, Debug)]
pub enum ConverterError {
    #[error("Validation error: {0}")]
    Validation(#[from] InputValidationError),

    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    #[error("Expression error: {0}")]
    Expression(#[from] ExpressionError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Rejected user input. Handled locally, no remote call is issued.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputValidationError {
    #[error("Not a number: {0:?}")]
    InvalidAmount(String),

    #[error("Amount must be a positive finite number, got {0}")]
    NonPositiveAmount(f64),

    #[error("Source and target currency must both be selected")]
    MissingCurrency,

    #[error("Unsupported currency: {0}")]
    UnknownCurrency(String),
}

/// Failure reported by the conversion backend (network, unknown currency, ...).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ServiceError {
    pub message: String,
}

impl ServiceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for ServiceError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for ServiceError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// Calculator expression errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("Empty expression")]
    Empty,

    #[error("Malformed expression: {0}")]
    Malformed(String),

    #[error("Expression does not evaluate to a finite number")]
    NonFinite,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_displays_message_only() {
        let err = ServiceError::new("Unsupported currency: XYZ");
        assert_eq!(err.to_string(), "Unsupported currency: XYZ");
    }

    #[test]
    fn test_converter_error_wraps_sources() {
        let err: ConverterError = InputValidationError::NonPositiveAmount(-1.0).into();
        assert_eq!(
            err.to_string(),
            "Validation error: Amount must be a positive finite number, got -1"
        );

        let err: ConverterError = ExpressionError::Empty.into();
        assert!(matches!(err, ConverterError::Expression(ExpressionError::Empty)));
    }
}
