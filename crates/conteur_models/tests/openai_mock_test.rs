//! OpenAI client wire behavior against a local mock server.

use conteur_core::CompletionRequest;
use conteur_error::ProviderErrorKind;
use conteur_interface::{CompletionDriver, ProviderKind};
use conteur_models::{OpenAIClient, ProviderConfig};
use mockito::Matcher;
use serde_json::json;

fn client_for(server: &mockito::ServerGuard) -> OpenAIClient {
    let config = ProviderConfig::new(ProviderKind::OpenAI)
        .with_api_key("sk-test")
        .with_base_url(server.url());
    OpenAIClient::new(config).unwrap()
}

#[tokio::test]
async fn test_openai_puts_system_first() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer sk-test")
        .match_body(Matcher::PartialJson(json!({
            "model": "gpt-4o-mini",
            "messages": [
                {"role": "system", "content": "Sois bref."},
                {"role": "user", "content": "Bonjour"}
            ]
        })))
        .with_status(200)
        .with_body(
            json!({
                "id": "chatcmpl-1",
                "choices": [{"message": {"role": "assistant", "content": "Salut !"}, "finish_reason": "stop"}]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let text = client_for(&server)
        .complete(&CompletionRequest::new("Bonjour").with_system("Sois bref."))
        .await
        .unwrap();

    assert_eq!(text, "Salut !");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_openai_empty_choices_is_malformed() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body(json!({"id": "chatcmpl-2", "choices": []}).to_string())
        .create_async()
        .await;

    let err = client_for(&server)
        .complete(&CompletionRequest::new("Bonjour"))
        .await
        .unwrap_err();

    assert!(matches!(
        err.provider().map(|p| &p.kind),
        Some(ProviderErrorKind::MalformedResponse(_))
    ));
}

#[tokio::test]
async fn test_openai_invalid_json_is_malformed() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body("<html>gateway</html>")
        .create_async()
        .await;

    let err = client_for(&server)
        .complete(&CompletionRequest::new("Bonjour"))
        .await
        .unwrap_err();

    assert!(matches!(
        err.provider().map(|p| &p.kind),
        Some(ProviderErrorKind::MalformedResponse(_))
    ));
}
