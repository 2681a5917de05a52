//! Fakes shared by the rephrase integration tests.

use std::sync::Mutex;

use async_trait::async_trait;
use rephrase_llms::{CompletionClient, CompletionRequest, CompletionResponse};
use rephrase_runtime::Tokenizer;

/// Replies with a fixed outcome and keeps every request it saw.
pub struct ScriptedClient {
    reply: Reply,
    pub requests: Mutex<Vec<CompletionRequest>>,
}

#[allow(dead_code)]
pub enum Reply {
    Text(String),
    NoContent,
    Fail(String),
}

#[allow(dead_code)]
impl ScriptedClient {
    pub fn replying(text: impl Into<String>) -> Self {
        Self::new(Reply::Text(text.into()))
    }

    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn only_request(&self) -> CompletionRequest {
        let requests = self.requests.lock().unwrap();
        assert_eq!(requests.len(), 1, "expected exactly one completion call");
        requests[0].clone()
    }

    pub fn sent_prompt(&self) -> String {
        self.only_request().messages[0].content.clone()
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    fn provider_id(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, request: CompletionRequest) -> rephrase_llms::Result<CompletionResponse> {
        self.requests.lock().unwrap().push(request);
        match &self.reply {
            Reply::Text(text) => Ok(CompletionResponse::text(text.clone())),
            Reply::NoContent => Ok(CompletionResponse {
                content: None,
                finish_reason: None,
                usage: None,
                model: None,
            }),
            Reply::Fail(message) => Err(rephrase_llms::Error::provider_error(message.clone())),
        }
    }
}

/// One token per whitespace-separated word.
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn count_tokens(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }
}

#[allow(dead_code)]
pub fn reply(could_improve: &str, result: &str) -> String {
    format!(
        "```xml\n<REPHRASER>\n<COULD_IMPROVE_USER_INPUT>{could_improve}</COULD_IMPROVE_USER_INPUT>\n<RESULT>\n{result}\n</RESULT>\n</REPHRASER>```"
    )
}
