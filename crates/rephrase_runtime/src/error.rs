//! Rephrase error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RephraseError {
    /// The completion call failed or returned no usable message content.
    #[error("completion failed: {0}")]
    Completion(String),

    /// A required tag pair is missing from the model reply.
    #[error("malformed response: missing <{tag}>...</{tag}>")]
    MalformedResponse { tag: String },

    #[error("tokenizer error: {0}")]
    Tokenizer(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl RephraseError {
    pub fn malformed(tag: impl Into<String>) -> Self {
        RephraseError::MalformedResponse { tag: tag.into() }
    }
}

impl From<rephrase_llms::Error> for RephraseError {
    fn from(err: rephrase_llms::Error) -> Self {
        RephraseError::Completion(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RephraseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message_names_tag() {
        let err = RephraseError::malformed("RESULT");
        assert_eq!(
            err.to_string(),
            "malformed response: missing <RESULT>...</RESULT>"
        );
    }

    #[test]
    fn test_llm_error_maps_to_completion() {
        let err = RephraseError::from(rephrase_llms::Error::provider_error("HTTP 500"));
        assert!(matches!(err, RephraseError::Completion(_)));
        assert!(err.to_string().contains("HTTP 500"));
    }
}
