//! Error types for mediateca.

use thiserror::Error;

/// Common error type for mediateca operations.
#[derive(Error, Debug)]
pub enum MediatecaError {
    /// The filename's extension maps to no media category.
    #[error("unsupported file type")]
    UnsupportedType,

    /// The requested file is absent from the current listing.
    #[error("{0} not found")]
    NotFound(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Base64 payload could not be decoded.
    #[error("base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP transport error (client side).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure reported by the server in a response body (client side).
    #[error("server error: {0}")]
    Server(String),
}

/// Result type alias for mediateca operations.
pub type Result<T> = std::result::Result<T, MediatecaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_type_display() {
        let err = MediatecaError::UnsupportedType;
        assert_eq!(err.to_string(), "unsupported file type");
    }

    #[test]
    fn test_not_found_display() {
        let err = MediatecaError::NotFound("file 42".to_string());
        assert_eq!(err.to_string(), "file 42 not found");
    }

    #[test]
    fn test_config_error_display() {
        let err = MediatecaError::Config("bad port".to_string());
        assert_eq!(err.to_string(), "configuration error: bad port");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: MediatecaError = io_err.into();
        assert!(matches!(err, MediatecaError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_server_error_display() {
        let err = MediatecaError::Server("Archivo no encontrado".to_string());
        assert!(err.to_string().contains("Archivo no encontrado"));
    }
}
