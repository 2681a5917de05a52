//! Fixed completion parameters and configurable defaults.

/// Sampling temperature sent with every rephrase call.
pub const TEMPERATURE: f32 = 1.0;

/// Output cap for the rephrase completion.
pub const MAX_OUTPUT_TOKENS: u32 = 512;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_MAX_TURNS_CONSIDERED: usize = 6;
pub const DEFAULT_MAX_HISTORY_TOKENS: usize = 2000;

/// Base URL for OpenAI-compatible chat completions.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/";
