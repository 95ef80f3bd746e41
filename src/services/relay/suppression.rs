//! Delivery suppression and unread enrichment.
//!
//! Best-effort by contract: every lookup failure is logged and swallowed so
//! a flaky datastore can never block a push. The silent-failure scope ends
//! here; dispatch errors are surfaced normally.

use serde_json::{Map, json};

use crate::external::DatastoreClient;
use crate::models::{OutboundPush, PresenceSnapshot, SkipReason};

/// Outcome of the suppression stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressionDecision {
    /// Do not dispatch; respond with the skip reason
    Skip(SkipReason),
    /// Continue to dispatch (payload may have been enriched)
    Proceed,
}

/// Consult live presence/unread state for one (chat, recipient) pair.
///
/// The presence check runs first and short-circuits: a recipient who is
/// online with the target chat open is never interrupted, and the unread
/// lookup is not issued for a skipped send.
pub async fn try_enrich(
    datastore: &DatastoreClient,
    chat_id: &str,
    recipient_id: &str,
    push: &mut OutboundPush,
) -> SuppressionDecision {
    match datastore.fetch_presence(recipient_id).await {
        Ok(Some(presence)) if is_viewing_chat(&presence, chat_id) => {
            return SuppressionDecision::Skip(SkipReason::RecipientInChat);
        }
        Ok(_) => {}
        Err(error) => {
            tracing::warn!(
                error = %error,
                recipient_id,
                "presence lookup failed, continuing without suppression"
            );
        }
    }

    match datastore.fetch_unread(chat_id, recipient_id).await {
        Ok(Some(unread_count)) => apply_unread(push, chat_id, unread_count),
        Ok(None) => {}
        Err(error) => {
            tracing::warn!(
                error = %error,
                chat_id,
                recipient_id,
                "unread lookup failed, dispatching without unread metadata"
            );
        }
    }

    SuppressionDecision::Proceed
}

/// The suppression rule: online and actively viewing the target chat.
pub fn is_viewing_chat(presence: &PresenceSnapshot, chat_id: &str) -> bool {
    presence.is_online && presence.active_chat_id.as_deref() == Some(chat_id)
}

/// Merge the unread count into the outbound data map, adding grouping
/// metadata once more than one message is pending.
pub fn apply_unread(push: &mut OutboundPush, chat_id: &str, unread_count: u64) {
    push.data
        .get_or_insert_with(Map::new)
        .insert("unread_count".to_string(), json!(unread_count));

    if unread_count > 1 {
        push.android_group = Some(format!("chat_{}", chat_id));
        push.android_group_message = Some(format!("{} new messages", unread_count));
    }
}
