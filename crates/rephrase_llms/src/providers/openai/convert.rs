//! Conversion between neutral types and chat-completions wire types

use super::types::{ChatMessage, ChatRequest, ChatResponse};
use crate::error::{Error, Result};
use crate::types::{CompletionRequest, CompletionResponse, FinishReason, Usage};

pub fn to_chat_request(req: &CompletionRequest) -> ChatRequest {
    ChatRequest {
        model: req.model.clone(),
        messages: req
            .messages
            .iter()
            .map(|m| ChatMessage {
                role: m.role.as_str().to_string(),
                content: m.content.clone(),
            })
            .collect(),
        temperature: req.temperature,
        max_tokens: req.max_tokens,
        stream: req.stream,
    }
}

/// Keep the first choice only; a reply without choices is invalid.
pub fn from_chat_response(resp: ChatResponse) -> Result<CompletionResponse> {
    let choice = resp
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| Error::invalid_response("no choices in chat completion response"))?;

    Ok(CompletionResponse {
        content: choice.message.content,
        finish_reason: choice.finish_reason.as_deref().map(FinishReason::from_raw),
        usage: resp.usage.map(|u| Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        }),
        model: resp.model,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Message;

    fn response(json: &str) -> ChatResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_to_chat_request() {
        let req = CompletionRequest::new("gpt-4o-mini", vec![Message::system("prompt")])
            .with_temperature(1.0)
            .with_max_tokens(512);
        let chat = to_chat_request(&req);
        assert_eq!(chat.model, "gpt-4o-mini");
        assert_eq!(chat.messages.len(), 1);
        assert_eq!(chat.messages[0].role, "system");
        assert_eq!(chat.messages[0].content, "prompt");
        assert_eq!(chat.temperature, Some(1.0));
        assert_eq!(chat.max_tokens, Some(512));
        assert!(!chat.stream);
    }

    #[test]
    fn test_from_chat_response_takes_first_choice() {
        let resp = response(
            r#"{"id":"x","model":"m","choices":[
                {"index":0,"message":{"role":"assistant","content":"first"},"finish_reason":"stop"},
                {"index":1,"message":{"role":"assistant","content":"second"},"finish_reason":"stop"}
            ],"usage":{"prompt_tokens":10,"completion_tokens":2,"total_tokens":12}}"#,
        );
        let out = from_chat_response(resp).unwrap();
        assert_eq!(out.content.as_deref(), Some("first"));
        assert_eq!(out.finish_reason, Some(FinishReason::Stop));
        assert_eq!(out.usage.unwrap().total_tokens, 12);
        assert_eq!(out.model.as_deref(), Some("m"));
    }

    #[test]
    fn test_from_chat_response_without_choices() {
        let resp = response(r#"{"choices":[]}"#);
        let err = from_chat_response(resp).unwrap_err();
        assert!(matches!(err, Error::InvalidResponse(_)));
    }

    #[test]
    fn test_from_chat_response_null_content() {
        let resp = response(r#"{"choices":[{"message":{"content":null},"finish_reason":"length"}]}"#);
        let out = from_chat_response(resp).unwrap();
        assert!(out.content.is_none());
        assert_eq!(out.finish_reason, Some(FinishReason::Length));
    }
}
