//! The push relay pipeline.
//!
//! One request flows resolver → suppression → dispatch. The suppression
//! stage is best-effort and can only skip or enrich; resolver and dispatch
//! failures surface as typed errors.

pub mod resolver;
pub mod suppression;

use std::sync::Arc;

use crate::config::settings::Settings;
use crate::error::AppResult;
use crate::external::{DatastoreClient, ProviderClient, ProviderResponse};
use crate::models::{PushRequest, SkipReason};
use suppression::SuppressionDecision;

/// Result of relaying one push request.
#[derive(Debug, Clone, PartialEq)]
pub enum RelayOutcome {
    /// The send was suppressed; nothing reached the provider
    Skipped { reason: SkipReason },
    /// The provider was called; its response is forwarded verbatim
    Dispatched(ProviderResponse),
}

/// Stateless relay pipeline over the configured collaborators.
///
/// Holds no per-request state; every invocation recomputes suppression and
/// enrichment from live datastore reads.
#[derive(Clone)]
pub struct RelayService {
    datastore: Option<Arc<DatastoreClient>>,
    provider: Arc<ProviderClient>,
}

impl RelayService {
    /// Build the relay from application settings.
    ///
    /// An unconfigured datastore disables suppression/enrichment; an
    /// unconfigured provider is reported per request at dispatch time.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            datastore: DatastoreClient::from_settings(&settings.datastore).map(Arc::new),
            provider: Arc::new(ProviderClient::new(settings.provider.clone())),
        }
    }

    /// Whether presence/unread enrichment is active
    pub fn enrichment_enabled(&self) -> bool {
        self.datastore.is_some()
    }

    /// Whether the push provider credentials are present
    pub fn provider_configured(&self) -> bool {
        self.provider.configured()
    }

    /// Run one request through the full pipeline.
    ///
    /// # Errors
    /// - Resolver failures (`MissingContent`, `MissingRecipients`)
    /// - Dispatch failures (`ProviderNotConfigured`, `ProviderTimeout`,
    ///   `Internal`)
    pub async fn handle(&self, request: PushRequest) -> AppResult<RelayOutcome> {
        let mut draft = resolver::resolve(request)?;

        if let Some(datastore) = &self.datastore
            && let (Some(chat_id), Some(recipient_id)) =
                (draft.chat_id.clone(), draft.recipient_id.clone())
        {
            let decision =
                suppression::try_enrich(datastore, &chat_id, &recipient_id, &mut draft.push).await;

            if let SuppressionDecision::Skip(reason) = decision {
                tracing::info!(chat_id = %chat_id, recipient_id = %recipient_id, "push suppressed");
                return Ok(RelayOutcome::Skipped { reason });
            }
        }

        let response = self.provider.send(&draft.push).await?;

        tracing::debug!(status = response.status, "provider response forwarded");
        Ok(RelayOutcome::Dispatched(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::{DatastoreConfig, ProviderConfig};
    use crate::error::AppError;
    use serde_json::json;

    fn unconfigured_service() -> RelayService {
        RelayService::from_settings(&Settings::default())
    }

    #[test]
    fn test_from_settings_disables_enrichment_without_datastore() {
        let service = unconfigured_service();
        assert!(!service.enrichment_enabled());
        assert!(!service.provider_configured());
    }

    #[test]
    fn test_from_settings_enables_enrichment_with_datastore() {
        let settings = Settings {
            datastore: DatastoreConfig {
                base_url: "https://data.example.com".to_string(),
                service_key: "key".to_string(),
            },
            provider: ProviderConfig {
                app_id: "app".to_string(),
                api_key: "key".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let service = RelayService::from_settings(&settings);
        assert!(service.enrichment_enabled());
        assert!(service.provider_configured());
    }

    #[tokio::test]
    async fn test_handle_surfaces_resolver_failures() {
        let service = unconfigured_service();

        let request: PushRequest =
            serde_json::from_value(json!({"contents": {"en": "x"}})).expect("parse");
        let result = service.handle(request).await;
        assert!(matches!(result, Err(AppError::MissingRecipients)));
    }

    #[tokio::test]
    async fn test_handle_reports_unconfigured_provider() {
        // No datastore, no provider credentials: the pipeline must fail at
        // the dispatch gate without attempting any network call.
        let service = unconfigured_service();

        let request: PushRequest = serde_json::from_value(json!({
            "contents": {"en": "x"},
            "user_ids": ["u1"]
        }))
        .expect("parse");

        let result = service.handle(request).await;
        assert!(matches!(result, Err(AppError::ProviderNotConfigured)));
    }
}
