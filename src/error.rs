//! Error types for the receipt processor.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while configuring the service,
//! storing receipts and parsing receipt fields.

use thiserror::Error;

/// The main error type for the receipt processor.
///
/// Scoring itself never fails: the calculator converts [`ServiceError::InvalidField`]
/// into a zero contribution from the affected rule. The remaining variants
/// surface through configuration loading and the HTTP API.
///
/// # Example
///
/// ```
/// use receipt_processor::error::ServiceError;
///
/// let error = ServiceError::ReceiptNotFound {
///     id: "7fb1377b-b223-49d9-a31a-5a02701dd310".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Receipt not found: 7fb1377b-b223-49d9-a31a-5a02701dd310"
/// );
/// ```
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was present but unusable.
    #[error("Invalid configuration value '{key}': {message}")]
    InvalidConfig {
        /// The configuration key or environment variable.
        key: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A receipt field could not be parsed into the expected type.
    #[error("Could not parse {field} '{value}' as {expected}")]
    InvalidField {
        /// The receipt field name (e.g., "total").
        field: &'static str,
        /// The submitted text.
        value: String,
        /// The expected form of the field.
        expected: &'static str,
    },

    /// No receipt is stored under the given identifier.
    #[error("Receipt not found: {id}")]
    ReceiptNotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// The receipt store could not complete an operation.
    #[error("Receipt store unavailable: {message}")]
    StoreUnavailable {
        /// A description of the store failure.
        message: String,
    },

    /// The tracing subscriber could not be installed.
    #[error("Failed to initialise logging: {message}")]
    TelemetryInit {
        /// A description of the failure.
        message: String,
    },

    /// An I/O error occurred while serving requests.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A type alias for Results that return ServiceError.
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = ServiceError::ConfigNotFound {
            path: "/missing/service.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/service.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = ServiceError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_key_and_message() {
        let error = ServiceError::InvalidConfig {
            key: "APP_PORT".to_string(),
            message: "must be a valid u16".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration value 'APP_PORT': must be a valid u16"
        );
    }

    #[test]
    fn test_invalid_field_displays_field_value_and_expectation() {
        let error = ServiceError::InvalidField {
            field: "total",
            value: "abc".to_string(),
            expected: "a decimal amount",
        };
        assert_eq!(
            error.to_string(),
            "Could not parse total 'abc' as a decimal amount"
        );
    }

    #[test]
    fn test_store_unavailable_displays_message() {
        let error = ServiceError::StoreUnavailable {
            message: "lock poisoned".to_string(),
        };
        assert_eq!(error.to_string(), "Receipt store unavailable: lock poisoned");
    }

    #[test]
    fn test_io_error_converts_with_question_mark() {
        fn fails() -> ServiceResult<()> {
            Err(std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken"))?;
            Ok(())
        }

        let error = fails().unwrap_err();
        assert!(matches!(error, ServiceError::Io(_)));
        assert_eq!(error.to_string(), "I/O error: port taken");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ServiceError>();
    }
}
