//! Push provider dispatch client.
//!
//! Sends the finalized payload to the provider's notifications endpoint with
//! a bounded per-request timeout and no retries. The provider's response is
//! handed back verbatim; retry policy belongs to the caller of the relay.

use std::time::Duration;

use serde_json::json;

use super::client::HTTP_CLIENT;
use crate::config::settings::ProviderConfig;
use crate::error::{AppError, AppResult};
use crate::models::OutboundPush;

/// Raw provider response forwarded to the relay caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderResponse {
    pub status: u16,
    pub body: String,
}

/// Client for the push provider's REST API.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    config: ProviderConfig,
}

impl ProviderClient {
    /// Creates a new provider client from configuration
    pub fn new(config: ProviderConfig) -> Self {
        Self { config }
    }

    /// Whether both provider credentials are present
    pub fn configured(&self) -> bool {
        self.config.configured()
    }

    /// Dispatch one finalized push to the provider.
    ///
    /// The payload is wrapped with the provider application id. Exactly one
    /// POST is issued; a timeout maps to `ProviderTimeout` and any other
    /// transport error to `Internal`.
    ///
    /// # Errors
    /// - `ProviderNotConfigured` before any network call when credentials
    ///   are missing
    /// - `ProviderTimeout` when the request exceeds the dispatch timeout
    /// - `Internal` on any other transport failure
    pub async fn send(&self, push: &OutboundPush) -> AppResult<ProviderResponse> {
        if !self.config.configured() {
            return Err(AppError::ProviderNotConfigured);
        }

        let mut body = serde_json::to_value(push).map_err(|e| AppError::Internal {
            source: anyhow::Error::new(e).context("payload serialization failed"),
        })?;
        body["app_id"] = json!(self.config.app_id);

        let response = HTTP_CLIENT
            .post(&self.config.url)
            .timeout(Duration::from_secs(self.config.timeout_seconds))
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/json;charset=utf-8",
            )
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Basic {}", self.config.api_key),
            )
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_transport_error)?;

        Ok(ProviderResponse { status, body })
    }
}

/// Map a reqwest error to the relay taxonomy.
fn map_transport_error(error: reqwest::Error) -> AppError {
    if error.is_timeout() {
        AppError::ProviderTimeout
    } else {
        AppError::Internal {
            source: anyhow::Error::new(error).context("provider request failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value};

    fn minimal_push() -> OutboundPush {
        OutboundPush {
            data: None,
            contents: json!({"en": "hi"}),
            headings: None,
            include_external_user_ids: Some(vec![json!("u1")]),
            filters: None,
            android_group: None,
            android_group_message: None,
        }
    }

    #[tokio::test]
    async fn test_send_without_credentials_fails_before_network() {
        let client = ProviderClient::new(ProviderConfig {
            // Unroutable URL: the test must fail on configuration, not I/O
            url: "http://192.0.2.1/notifications".to_string(),
            ..Default::default()
        });

        let result = client.send(&minimal_push()).await;
        assert!(matches!(result, Err(AppError::ProviderNotConfigured)));
    }

    #[test]
    fn test_payload_wrapping_includes_app_id() {
        let push = minimal_push();
        let mut body = serde_json::to_value(&push).expect("serialize");
        body["app_id"] = json!("app-1");

        let object: &Map<String, Value> = body.as_object().expect("object");
        assert_eq!(object.get("app_id"), Some(&json!("app-1")));
        assert_eq!(object.get("contents"), Some(&json!({"en": "hi"})));
        assert!(!object.contains_key("filters"));
    }
}
