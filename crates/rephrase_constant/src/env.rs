//! Environment variable names read by the runtime and CLI.

pub const MODEL: &str = "REPHRASE_MODEL";
pub const MODE: &str = "REPHRASE_MODE";
pub const MAX_TURNS: &str = "REPHRASE_MAX_TURNS";
pub const MAX_HISTORY_TOKENS: &str = "REPHRASE_MAX_HISTORY_TOKENS";

pub const API_KEY: &str = "REPHRASE_API_KEY";
/// Fallback when `REPHRASE_API_KEY` is unset.
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const BASE_URL: &str = "REPHRASE_BASE_URL";
