//! Rephrase configuration

use std::str::FromStr;

use rephrase_constant::{completion, env};
use rephrase_core::Mode;

use crate::error::{RephraseError, Result};

/// Caller-tunable settings. Temperature and output cap are fixed and live in
/// `rephrase_constant::completion`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RephraseConfig {
    /// Model identifier passed to the completion service
    pub model: String,
    /// Output contract
    pub mode: Mode,
    /// How many trailing turns are considered before budgeting
    pub max_turns_considered: usize,
    /// Token budget for the history block
    pub max_history_tokens: usize,
}

impl Default for RephraseConfig {
    fn default() -> Self {
        Self {
            model: completion::DEFAULT_MODEL.to_string(),
            mode: Mode::default(),
            max_turns_considered: completion::DEFAULT_MAX_TURNS_CONSIDERED,
            max_history_tokens: completion::DEFAULT_MAX_HISTORY_TOKENS,
        }
    }
}

impl RephraseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_max_turns_considered(mut self, max: usize) -> Self {
        self.max_turns_considered = max;
        self
    }

    pub fn with_max_history_tokens(mut self, max: usize) -> Self {
        self.max_history_tokens = max;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Unparseable numbers are ignored and the default is kept.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`RephraseConfig::from_env`] with an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(model) = lookup(env::MODEL).filter(|m| !m.trim().is_empty()) {
            config.model = model.trim().to_string();
        }

        if let Some(mode) = lookup(env::MODE) {
            config.mode = Mode::from_name(Some(&mode));
        }

        if let Some(val) = lookup(env::MAX_TURNS).and_then(|v| parse_count(&v)) {
            config.max_turns_considered = val;
        }

        if let Some(val) = lookup(env::MAX_HISTORY_TOKENS).and_then(|v| parse_count(&v)) {
            config.max_history_tokens = val;
        }

        config
    }

    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(RephraseError::Config("model must not be empty".to_string()));
        }
        Ok(())
    }
}

fn parse_count(raw: &str) -> Option<usize> {
    usize::from_str(raw.trim()).ok()
}
