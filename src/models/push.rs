//! Wire and domain types for push relaying.
//!
//! The inbound request is deliberately loose: callers send several historical
//! field spellings and the relay normalizes them. Fields that may arrive with
//! the wrong JSON type stay `serde_json::Value` so a malformed field degrades
//! to "absent" during resolution instead of failing the whole body parse.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Inbound push-send request body.
///
/// Unknown keys are ignored. Everything is optional at the parse stage;
/// presence requirements are enforced by the resolver.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PushRequest {
    /// Arbitrary key/value payload forwarded to the recipient device.
    /// May carry `chat_id` and `recipient_id` used for suppression lookups.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub data: Option<Map<String, Value>>,

    /// Recipient list, highest priority spelling
    #[serde(default)]
    #[schema(value_type = Vec<String>)]
    pub recipient_ids: Option<Value>,

    /// Recipient list, second priority spelling
    #[serde(default)]
    #[schema(value_type = Vec<String>)]
    pub user_ids: Option<Value>,

    /// Recipient list, provider-native spelling, lowest priority
    #[serde(default)]
    #[schema(value_type = Vec<String>)]
    pub include_external_user_ids: Option<Value>,

    /// Provider-specific targeting expression, passed through opaquely
    #[serde(default)]
    #[schema(value_type = Object)]
    pub filters: Option<Value>,

    /// Localized body text keyed by locale code
    #[serde(default)]
    #[schema(value_type = Object)]
    pub contents: Option<Value>,

    /// Localized title text keyed by locale code
    #[serde(default)]
    #[schema(value_type = Object)]
    pub headings: Option<Value>,

    /// Scalar title, used as `headings.en` when `headings` is absent
    #[serde(default)]
    pub title: Option<String>,

    /// Scalar body, used as `contents.en` when `contents` is absent
    #[serde(default)]
    pub body: Option<String>,
}

/// Finalized provider payload.
///
/// Serialization skips absent fields so the provider sees exactly the keys
/// the relay resolved. The provider application id is injected by the
/// dispatcher when the request is sent, not stored here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutboundPush {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,

    pub contents: Value,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub headings: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_external_user_ids: Option<Vec<Value>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub android_group: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub android_group_message: Option<String>,
}

/// A resolved push plus the keys the suppression stage needs.
///
/// `chat_id` / `recipient_id` are only populated when they could be
/// determined unambiguously; either being `None` silently disables
/// suppression and enrichment for the request.
#[derive(Debug, Clone, PartialEq)]
pub struct PushDraft {
    pub push: OutboundPush,
    pub chat_id: Option<String>,
    pub recipient_id: Option<String>,
}

/// Presence row fetched from the datastore. Read-only for the relay.
#[derive(Debug, Clone, Deserialize)]
pub struct PresenceSnapshot {
    pub is_online: bool,
    pub active_chat_id: Option<String>,
}

/// Unread-count row fetched from the datastore. Read-only for the relay.
#[derive(Debug, Clone, Deserialize)]
pub struct UnreadSnapshot {
    pub unread_count: u64,
}

/// Why a send was suppressed instead of dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The recipient is online with the target chat open
    RecipientInChat,
}
