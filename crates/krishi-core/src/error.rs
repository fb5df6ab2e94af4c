//! Error types for the Krishi Sevak client

use thiserror::Error;

/// Failure of a single backend round trip.
///
/// Every panel collapses these into its own fixed message; the variant is
/// only used for logging.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        ApiError::Transport(msg.into())
    }

    /// Create a decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        ApiError::Decode(msg.into())
    }

    /// True for any non-2xx response
    pub fn is_status(&self) -> bool {
        matches!(self, ApiError::Status(_))
    }
}

/// Main error type for client-side operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    #[error("Unknown crop: {0}")]
    UnknownCrop(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an unknown section error
    pub fn unknown_section(key: impl Into<String>) -> Self {
        Error::UnknownSection(key.into())
    }

    /// Create an unknown crop error
    pub fn unknown_crop(key: impl Into<String>) -> Self {
        Error::UnknownCrop(key.into())
    }

    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Error::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_messages() {
        assert_eq!(ApiError::Status(503).to_string(), "HTTP error: 503");
        assert_eq!(
            ApiError::transport("connection refused").to_string(),
            "Request failed: connection refused"
        );
        assert!(ApiError::Status(404).is_status());
        assert!(!ApiError::decode("eof").is_status());
    }

    #[test]
    fn test_api_error_converts() {
        let err: Error = ApiError::Status(500).into();
        assert!(matches!(err, Error::Api(ApiError::Status(500))));
    }
}
