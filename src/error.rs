//! Custom error types for the Rust hours bot.
//!
//! Aggregation outcomes other than success are expressed as variants of
//! [`RustHoursError`], so callers can render each one differently.

use std::fmt;

/// Main error type for bot and aggregation operations.
#[derive(Debug)]
pub enum RustHoursError {
    /// Configuration errors (missing env vars, invalid values)
    Config(String),
    /// Player identifier failed validation
    InvalidInput(String),
    /// The stats provider confirmed the player does not exist
    NotFound(String),
    /// Timeout, network failure, non-success status or malformed payload
    Provider(String),
    /// Generic I/O errors
    Io(std::io::Error),
}

impl fmt::Display for RustHoursError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::Provider(msg) => write!(f, "Stats provider error: {}", msg),
            Self::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for RustHoursError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RustHoursError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RustHoursError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<reqwest::Error> for RustHoursError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Provider(format!("Request timed out: {}", err))
        } else if err.is_decode() {
            Self::Provider(format!("Invalid response: {}", err))
        } else {
            Self::Provider(format!("Request failed: {}", err))
        }
    }
}

/// Result type alias for bot operations.
pub type Result<T> = std::result::Result<T, RustHoursError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_prefixes() {
        let err = RustHoursError::NotFound("player 42".to_string());
        assert_eq!(err.to_string(), "Not found: player 42");

        let err = RustHoursError::Provider("HTTP 503".to_string());
        assert_eq!(err.to_string(), "Stats provider error: HTTP 503");
    }

    #[test]
    fn test_io_error_is_source() {
        let err: RustHoursError = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken").into();
        assert!(matches!(err, RustHoursError::Io(_)));
        assert!(err.source().is_some());
        assert!(RustHoursError::Config("x".to_string()).source().is_none());
    }

    #[tokio::test]
    async fn test_reqwest_error_maps_to_provider() {
        // Nothing listens on port 1, so the connection is refused
        let err = reqwest::get("http://127.0.0.1:1/").await.unwrap_err();
        match RustHoursError::from(err) {
            RustHoursError::Provider(msg) => assert!(msg.starts_with("Request failed")),
            other => panic!("Expected Provider error, got {:?}", other),
        }
    }
}
