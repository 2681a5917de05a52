//! Completion client trait

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{CompletionRequest, CompletionResponse};

/// A service that answers one non-streaming chat-completion request.
///
/// Implementations must be shareable across tasks; the rephraser holds them
/// behind `Arc<dyn CompletionClient>`.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Identifier used in logs (e.g. "openai").
    fn provider_id(&self) -> &str;

    /// Issue the request and return the first choice of the reply.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;
}
