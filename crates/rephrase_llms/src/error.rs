//! Error types for completion calls

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// No API key was configured for the provider
    #[error("missing API key for provider '{0}'")]
    MissingApiKey(String),

    /// Transport failure (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("provider error: {0}")]
    Provider(String),

    /// Provider answered 2xx but the payload is unusable
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl Error {
    pub fn provider_error(message: impl Into<String>) -> Self {
        Error::Provider(message.into())
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Error::InvalidResponse(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_message() {
        let err = Error::MissingApiKey("openai".to_string());
        assert_eq!(err.to_string(), "missing API key for provider 'openai'");
    }

    #[test]
    fn test_provider_error_message() {
        let err = Error::provider_error("HTTP 500: boom");
        assert_eq!(err.to_string(), "provider error: HTTP 500: boom");
    }
}
