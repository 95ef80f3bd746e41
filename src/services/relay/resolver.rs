//! Recipient and content resolution.
//!
//! A pure transform from the loose inbound body to a dispatchable draft.
//! Resolution never performs I/O; everything here is deterministic over the
//! parsed request.

use serde_json::{Value, json};

use crate::error::{AppError, AppResult};
use crate::models::{OutboundPush, PushDraft, PushRequest};

/// Resolve a parsed request into a dispatchable draft.
///
/// # Resolution rules
/// - Recipients: strict priority `recipient_ids` → `user_ids` →
///   `include_external_user_ids`; only a non-empty JSON array counts, so a
///   wrong-typed or empty field falls through to the next spelling.
/// - `filters` pass through opaquely when present and non-null.
/// - `contents`/`headings` are used verbatim when they are non-empty objects,
///   else synthesized from scalar `body`/`title` under locale `"en"`.
/// - `chat_id` comes from `data.chat_id`; the enrichment candidate recipient
///   is `data.recipient_id`, else the first resolved recipient. Both must be
///   JSON strings to count.
///
/// # Errors
/// - `MissingContent` when no contents could be resolved
/// - `MissingRecipients` when neither a recipient list nor filters is present
pub fn resolve(request: PushRequest) -> AppResult<PushDraft> {
    let PushRequest {
        data,
        recipient_ids,
        user_ids,
        include_external_user_ids,
        filters,
        contents,
        headings,
        title,
        body,
    } = request;

    let recipients = [recipient_ids, user_ids, include_external_user_ids]
        .into_iter()
        .flatten()
        .find_map(|value| match value {
            Value::Array(items) if !items.is_empty() => Some(items),
            _ => None,
        });

    let filters = filters.filter(|value| !value.is_null());

    let headings = locale_map(headings).or_else(|| title.map(|title| json!({ "en": title })));
    let contents = locale_map(contents)
        .or_else(|| body.map(|body| json!({ "en": body })))
        .ok_or(AppError::MissingContent)?;

    if recipients.is_none() && filters.is_none() {
        return Err(AppError::MissingRecipients);
    }

    let chat_id = data
        .as_ref()
        .and_then(|data| data.get("chat_id"))
        .and_then(Value::as_str)
        .map(str::to_string);

    let recipient_id = data
        .as_ref()
        .and_then(|data| data.get("recipient_id"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .or_else(|| {
            recipients
                .as_ref()
                .and_then(|recipients| recipients.first())
                .and_then(Value::as_str)
                .map(str::to_string)
        });

    Ok(PushDraft {
        push: OutboundPush {
            data,
            contents,
            headings,
            include_external_user_ids: recipients,
            filters,
            android_group: None,
            android_group_message: None,
        },
        chat_id,
        recipient_id,
    })
}

/// A locale map counts only when it is a non-empty JSON object.
fn locale_map(value: Option<Value>) -> Option<Value> {
    match value {
        Some(Value::Object(map)) if !map.is_empty() => Some(Value::Object(map)),
        _ => None,
    }
}
