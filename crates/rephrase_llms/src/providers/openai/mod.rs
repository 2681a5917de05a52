//! OpenAI-compatible chat completions
//!
//! Works with any endpoint speaking the `/chat/completions` wire format
//! (OpenAI, OpenRouter, local gateways) by overriding the base URL.

mod convert;
mod provider;
mod types;

pub use provider::ChatCompletionsClient;
pub use types::{ChatRequest, ChatResponse, OpenAiConfig};
