//! Context and prompt building for a rephrase call.
//!
//! - **window**: token-bounded history block
//! - **prompt**: the two fixed prompt templates

mod prompt;
mod window;

pub use prompt::build_prompt;
pub use window::{window_history, HistoryWindow};
