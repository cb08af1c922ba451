//! Request plumbing shared by all provider clients.

use crate::ProviderConfig;
use conteur_error::{ConfigError, ConteurResult, ProviderError, ProviderErrorKind};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::error;

/// Builds the reusable HTTP client with the configured timeout.
pub(crate) fn http_client(config: &ProviderConfig) -> ConteurResult<Client> {
    Client::builder()
        .timeout(config.request_timeout())
        .build()
        .map_err(|e| ConfigError::new(format!("Failed to build HTTP client: {}", e)).into())
}

/// Adds a bearer credential when one is configured.
pub(crate) fn bearer(builder: RequestBuilder, api_key: Option<&str>) -> RequestBuilder {
    match api_key {
        Some(key) => builder.bearer_auth(key),
        None => builder,
    }
}

/// Sends a request, mapping transport failures and non-success statuses.
pub(crate) async fn send(
    builder: RequestBuilder,
    provider: &'static str,
) -> ConteurResult<Response> {
    let response = builder.send().await.map_err(|e| {
        error!(provider, error = ?e, "Failed to send request");
        ProviderError::new(ProviderErrorKind::Http(format!("Request failed: {}", e)))
    })?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        error!(provider, status = %status, body = %body, "Provider returned error");
        return Err(ProviderError::new(ProviderErrorKind::Api {
            status: status.as_u16(),
            body,
        })
        .into());
    }

    Ok(response)
}

/// Decodes a success body, treating undecodable payloads as malformed.
pub(crate) async fn decode<T: DeserializeOwned>(
    response: Response,
    provider: &'static str,
) -> ConteurResult<T> {
    let body = response.text().await.map_err(|e| {
        ProviderError::new(ProviderErrorKind::Http(format!("Failed to read body: {}", e)))
    })?;
    serde_json::from_str(&body).map_err(|e| {
        error!(provider, error = %e, "Failed to parse provider response");
        malformed(format!("Failed to parse response: {}", e)).into()
    })
}

/// Malformed-response error.
#[track_caller]
pub(crate) fn malformed(message: impl Into<String>) -> ProviderError {
    ProviderError::new(ProviderErrorKind::MalformedResponse(message.into()))
}
