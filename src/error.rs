//! Error types and handling for Umeme
//!
//! Fetch failures from the power-breakdown API are not errors in this sense:
//! they live in [`crate::acquisition::FetchFailure`] and always degrade to
//! estimated data. `UmemeError` covers the ambient layers around the
//! pipeline (configuration, logging setup, the web server).

use thiserror::Error;

/// Result type alias for Umeme operations
pub type Result<T> = std::result::Result<T, UmemeError>;

/// Main error type for Umeme
#[derive(Debug, Error)]
pub enum UmemeError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Validation errors
    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    /// File I/O errors
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// HTTP/Web server errors
    #[error("Web server error: {message}")]
    Web { message: String },
}

impl UmemeError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        UmemeError::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(field: S, message: S) -> Self {
        UmemeError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        UmemeError::Io {
            message: message.into(),
        }
    }

    pub fn serialization<S: Into<String>>(message: S) -> Self {
        UmemeError::Serialization {
            message: message.into(),
        }
    }

    /// Create a new web error
    pub fn web<S: Into<String>>(message: S) -> Self {
        UmemeError::Web {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for UmemeError {
    fn from(err: std::io::Error) -> Self {
        UmemeError::io(err.to_string())
    }
}

impl From<serde_yaml::Error> for UmemeError {
    fn from(err: serde_yaml::Error) -> Self {
        UmemeError::serialization(err.to_string())
    }
}

impl From<serde_json::Error> for UmemeError {
    fn from(err: serde_json::Error) -> Self {
        UmemeError::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = UmemeError::config("test config error");
        assert!(matches!(err, UmemeError::Config { .. }));

        let err = UmemeError::validation("api.zone", "must not be empty");
        assert!(matches!(err, UmemeError::Validation { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = UmemeError::config("test error");
        assert_eq!(format!("{}", err), "Configuration error: test error");

        let err = UmemeError::validation("web.port", "invalid value");
        assert_eq!(format!("{}", err), "Validation error: web.port - invalid value");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: UmemeError = io.into();
        assert!(matches!(err, UmemeError::Io { .. }));
    }
}
