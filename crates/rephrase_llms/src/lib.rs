//! rephrase_llms: the completion service collaborator for the query rephraser.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │            dyn CompletionClient              │
//! │      complete(CompletionRequest) -> Text     │
//! └──────────────────────────────────────────────┘
//!                       │
//!                       ▼
//!          ┌──────────────────────────┐
//!          │  ChatCompletionsClient   │
//!          │  POST {base}chat/        │
//!          │       completions        │
//!          └──────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rephrase_llms::{ChatCompletionsClient, CompletionClient, CompletionRequest, Message};
//!
//! # async fn run() -> rephrase_llms::Result<()> {
//! let client = ChatCompletionsClient::from_env()?;
//! let request = CompletionRequest::new("gpt-4o-mini", vec![Message::system("...")])
//!     .with_temperature(1.0)
//!     .with_max_tokens(512);
//! let response = client.complete(request).await?;
//! println!("{:?}", response.content);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod provider;
pub mod providers;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use provider::CompletionClient;

pub use providers::ChatCompletionsClient;
pub use providers::openai::OpenAiConfig;

pub use types::{
    CompletionRequest, CompletionResponse, FinishReason, Message, MessageRole, Usage,
};
