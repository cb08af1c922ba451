//! Replicate job creation and bounded polling against a local mock server.

use conteur_core::CompletionRequest;
use conteur_error::ProviderErrorKind;
use conteur_interface::{CompletionDriver, ProviderKind};
use conteur_models::{ProviderConfig, ReplicateClient};
use serde_json::json;
use std::time::Duration;

fn client_for(server: &mockito::ServerGuard, max_polls: u32) -> ReplicateClient {
    let config = ProviderConfig::new(ProviderKind::Replicate)
        .with_api_key("r8-test")
        .with_model("meta/llama")
        .with_base_url(server.url())
        .with_polling(max_polls, Duration::from_millis(1));
    ReplicateClient::new(config).unwrap()
}

fn job(server: &mockito::ServerGuard, status: &str) -> String {
    json!({
        "id": "p1",
        "status": status,
        "urls": {"get": format!("{}/v1/predictions/p1", server.url())}
    })
    .to_string()
}

#[tokio::test]
async fn test_replicate_polls_until_succeeded() {
    let mut server = mockito::Server::new_async().await;
    let create = server
        .mock("POST", "/v1/models/meta/llama/predictions")
        .match_header("authorization", "Bearer r8-test")
        .with_status(201)
        .with_body(job(&server, "starting"))
        .create_async()
        .await;
    let poll = server
        .mock("GET", "/v1/predictions/p1")
        .with_status(200)
        .with_body(
            json!({
                "id": "p1",
                "status": "succeeded",
                "output": ["Il était ", "une fois"],
                "urls": {"get": format!("{}/v1/predictions/p1", server.url())}
            })
            .to_string(),
        )
        .expect(1)
        .create_async()
        .await;

    let text = client_for(&server, 5)
        .complete(&CompletionRequest::new("Raconte"))
        .await
        .unwrap();

    assert_eq!(text, "Il était une fois");
    create.assert_async().await;
    poll.assert_async().await;
}

#[tokio::test]
async fn test_replicate_stops_after_poll_budget() {
    let mut server = mockito::Server::new_async().await;
    let _create = server
        .mock("POST", "/v1/models/meta/llama/predictions")
        .with_status(201)
        .with_body(job(&server, "starting"))
        .create_async()
        .await;
    let poll = server
        .mock("GET", "/v1/predictions/p1")
        .with_status(200)
        .with_body(job(&server, "processing"))
        .expect(3)
        .create_async()
        .await;

    let err = client_for(&server, 3)
        .complete(&CompletionRequest::new("Raconte"))
        .await
        .unwrap_err();

    assert!(matches!(
        err.provider().map(|p| &p.kind),
        Some(ProviderErrorKind::Timeout { polls: 3 })
    ));
    poll.assert_async().await;
}

#[tokio::test]
async fn test_replicate_failed_job_is_reported() {
    let mut server = mockito::Server::new_async().await;
    let _create = server
        .mock("POST", "/v1/models/meta/llama/predictions")
        .with_status(201)
        .with_body(
            json!({"id": "p2", "status": "failed", "error": "CUDA out of memory"}).to_string(),
        )
        .create_async()
        .await;

    let err = client_for(&server, 3)
        .complete(&CompletionRequest::new("Raconte"))
        .await
        .unwrap_err();

    match err.provider().map(|p| &p.kind) {
        Some(ProviderErrorKind::JobFailed(message)) => assert!(message.contains("CUDA")),
        other => panic!("unexpected {other:?}"),
    }
}
