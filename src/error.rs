//! Error types for Arcade.

use thiserror::Error;

/// Common error type for Arcade.
#[derive(Error, Debug)]
pub enum ArcadeError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Authentication error.
    #[error("authentication error: {0}")]
    Auth(String),

    /// Identity store error.
    #[error("identity store error: {0}")]
    Store(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<crate::auth::AuthError> for ArcadeError {
    fn from(e: crate::auth::AuthError) -> Self {
        ArcadeError::Auth(e.to_string())
    }
}

impl From<crate::auth::RegistrationError> for ArcadeError {
    fn from(e: crate::auth::RegistrationError) -> Self {
        ArcadeError::Auth(e.to_string())
    }
}

impl From<crate::store::StoreError> for ArcadeError {
    fn from(e: crate::store::StoreError) -> Self {
        ArcadeError::Store(e.to_string())
    }
}

/// Result type alias for Arcade operations.
pub type Result<T> = std::result::Result<T, ArcadeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_display() {
        let err = ArcadeError::Auth("password incorrect".to_string());
        assert_eq!(err.to_string(), "authentication error: password incorrect");
    }

    #[test]
    fn test_config_error_display() {
        let err = ArcadeError::Config("bad port".to_string());
        assert_eq!(err.to_string(), "configuration error: bad port");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ArcadeError = io_err.into();
        assert!(matches!(err, ArcadeError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_store_error_conversion() {
        let err: ArcadeError = crate::store::StoreError::DuplicateName.into();
        assert!(matches!(err, ArcadeError::Store(_)));
    }
}
