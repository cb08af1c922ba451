//! Hugging Face client wire behavior against a local mock server.

use conteur_core::{CompletionParams, CompletionRequest};
use conteur_interface::{CompletionDriver, ProviderKind};
use conteur_models::{HuggingFaceClient, ProviderConfig};
use mockito::Matcher;
use serde_json::json;

#[tokio::test]
async fn test_huggingface_merges_system_into_inputs() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/org/story-model")
        .match_header("authorization", "Bearer hf-test")
        .match_body(Matcher::PartialJson(json!({
            "inputs": "Consignes\n\nRaconte",
            "parameters": {"max_new_tokens": 64, "return_full_text": false}
        })))
        .with_status(200)
        .with_body(json!([{"generated_text": "Un lapin courait."}]).to_string())
        .create_async()
        .await;

    let config = ProviderConfig::new(ProviderKind::HuggingFace)
        .with_api_key("hf-test")
        .with_model("org/story-model")
        .with_base_url(server.url());
    let client = HuggingFaceClient::new(config).unwrap();
    let request = CompletionRequest::new("Raconte")
        .with_system("Consignes")
        .with_params(CompletionParams {
            max_tokens: 64,
            ..CompletionParams::default()
        });

    assert_eq!(client.complete(&request).await.unwrap(), "Un lapin courait.");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_huggingface_model_loading_is_retryable() {
    use conteur_error::RetryableError;

    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/models/gpt2")
        .with_status(503)
        .with_body(r#"{"error":"Model gpt2 is currently loading"}"#)
        .create_async()
        .await;

    let config = ProviderConfig::new(ProviderKind::HuggingFace)
        .with_model("gpt2")
        .with_base_url(server.url());
    let err = HuggingFaceClient::new(config)
        .unwrap()
        .complete(&CompletionRequest::new("x"))
        .await
        .unwrap_err();

    assert!(err.is_retryable());
}
