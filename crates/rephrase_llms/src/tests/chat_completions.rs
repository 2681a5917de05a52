use mockito::Matcher;
use serde_json::json;

use crate::error::Error;
use crate::provider::CompletionClient;
use crate::providers::ChatCompletionsClient;
use crate::providers::openai::OpenAiConfig;
use crate::types::{CompletionRequest, Message};

fn client_for(server: &mockito::Server) -> ChatCompletionsClient {
    let config = OpenAiConfig::new("test-key").with_base_url(server.url());
    ChatCompletionsClient::new(config).unwrap()
}

fn rephrase_request() -> CompletionRequest {
    CompletionRequest::new("gpt-4o-mini", vec![Message::system("the prompt")])
        .with_temperature(1.0)
        .with_max_tokens(512)
}

#[test]
fn test_missing_api_key() {
    let err = ChatCompletionsClient::new(OpenAiConfig::new("")).unwrap_err();
    assert!(matches!(err, Error::MissingApiKey(_)));
}

#[tokio::test]
async fn test_complete_sends_expected_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::PartialJson(json!({
            "model": "gpt-4o-mini",
            "messages": [{"role": "system", "content": "the prompt"}],
            "temperature": 1.0,
            "max_tokens": 512,
            "stream": false
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "chatcmpl-1",
                "model": "gpt-4o-mini",
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": "<RESULT>ok</RESULT>"},
                    "finish_reason": "stop"
                }],
                "usage": {"prompt_tokens": 20, "completion_tokens": 5, "total_tokens": 25}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let response = client_for(&server)
        .complete(rephrase_request())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.content.as_deref(), Some("<RESULT>ok</RESULT>"));
    assert_eq!(response.usage.unwrap().completion_tokens, 5);
}

#[tokio::test]
async fn test_complete_surfaces_http_errors() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(429)
        .with_body("rate limited")
        .create_async()
        .await;

    let err = client_for(&server)
        .complete(rephrase_request())
        .await
        .unwrap_err();

    match err {
        Error::Provider(message) => {
            assert!(message.contains("429"));
            assert!(message.contains("rate limited"));
        }
        other => panic!("expected provider error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_complete_rejects_empty_choices() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(r#"{"choices":[]}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .complete(rephrase_request())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidResponse(_)));
}

#[tokio::test]
async fn test_complete_rejects_garbage_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body("<html>gateway</html>")
        .create_async()
        .await;

    let err = client_for(&server)
        .complete(rephrase_request())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidResponse(_)));
}
