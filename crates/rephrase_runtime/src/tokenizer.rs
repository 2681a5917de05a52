//! Token counting used for history budgeting.
//!
//! Counts only drive the history budget; swapping implementations changes how
//! many turns fit, never whether a call succeeds.

use tiktoken_rs::CoreBPE;

use crate::error::{RephraseError, Result};

/// Deterministic text → token count.
pub trait Tokenizer: Send + Sync {
    fn count_tokens(&self, text: &str) -> usize;
}

/// BPE tokenizer using the `cl100k_base` encoding.
pub struct BpeTokenizer {
    bpe: CoreBPE,
}

impl BpeTokenizer {
    /// Load the `cl100k_base` ranks. Build once and share; loading is not cheap.
    pub fn cl100k() -> Result<Self> {
        let bpe = tiktoken_rs::cl100k_base().map_err(|e| RephraseError::Tokenizer(e.to_string()))?;
        Ok(Self { bpe })
    }
}

impl Tokenizer for BpeTokenizer {
    fn count_tokens(&self, text: &str) -> usize {
        self.bpe.encode_with_special_tokens(text).len()
    }
}

/// Rough heuristic of ~4 characters per token, rounded up.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharEstimateTokenizer;

impl Tokenizer for CharEstimateTokenizer {
    fn count_tokens(&self, text: &str) -> usize {
        text.chars().count().div_ceil(4)
    }
}
