//! Datastore lookup client for presence and unread-count state.
//!
//! The relay only ever reads from the datastore. Both lookups authenticate
//! with the configured service credential and return the first row of a
//! row-array response, mirroring the datastore's REST interface.

use anyhow::Context;

use super::client::HTTP_CLIENT;
use crate::config::settings::DatastoreConfig;
use crate::models::{PresenceSnapshot, UnreadSnapshot};

/// Read-only client for the presence/unread datastore.
#[derive(Debug, Clone)]
pub struct DatastoreClient {
    base_url: String,
    service_key: String,
}

impl DatastoreClient {
    /// Build a client when the datastore is configured.
    ///
    /// Returns `None` when base URL or service key is absent, which disables
    /// the suppression/enrichment stage for every request.
    pub fn from_settings(config: &DatastoreConfig) -> Option<Self> {
        if !config.enabled() {
            return None;
        }
        Some(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            service_key: config.service_key.clone(),
        })
    }

    /// Fetch the presence row for one user.
    ///
    /// # Returns
    /// `Ok(None)` when the datastore has no presence row for the user.
    pub async fn fetch_presence(&self, user_id: &str) -> anyhow::Result<Option<PresenceSnapshot>> {
        let url = format!("{}/presence", self.base_url);
        let rows: Vec<PresenceSnapshot> = HTTP_CLIENT
            .get(&url)
            .query(&[("user", user_id)])
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .send()
            .await
            .context("presence request failed")?
            .error_for_status()
            .context("presence request rejected")?
            .json()
            .await
            .context("presence response did not parse")?;

        Ok(rows.into_iter().next())
    }

    /// Fetch the unread count for one (chat, user) pair.
    ///
    /// # Returns
    /// `Ok(None)` when the datastore has no row for the pair.
    pub async fn fetch_unread(&self, chat_id: &str, user_id: &str) -> anyhow::Result<Option<u64>> {
        let url = format!("{}/unread", self.base_url);
        let rows: Vec<UnreadSnapshot> = HTTP_CLIENT
            .get(&url)
            .query(&[("chat", chat_id), ("user", user_id)])
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .send()
            .await
            .context("unread request failed")?
            .error_for_status()
            .context("unread request rejected")?
            .json()
            .await
            .context("unread response did not parse")?;

        Ok(rows.into_iter().next().map(|row| row.unread_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_settings_requires_full_config() {
        assert!(DatastoreClient::from_settings(&DatastoreConfig::default()).is_none());

        let partial = DatastoreConfig {
            base_url: "https://data.example.com".to_string(),
            service_key: String::new(),
        };
        assert!(DatastoreClient::from_settings(&partial).is_none());

        let full = DatastoreConfig {
            base_url: "https://data.example.com".to_string(),
            service_key: "key".to_string(),
        };
        assert!(DatastoreClient::from_settings(&full).is_some());
    }

    #[test]
    fn test_from_settings_trims_trailing_slash() {
        let config = DatastoreConfig {
            base_url: "https://data.example.com/rest/v1/".to_string(),
            service_key: "key".to_string(),
        };
        let client = DatastoreClient::from_settings(&config).expect("configured");
        assert_eq!(client.base_url, "https://data.example.com/rest/v1");
    }
}
