//! Push endpoint response DTOs.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::SkipReason;

/// Body returned when a send was suppressed instead of dispatched.
#[derive(Debug, Serialize, ToSchema)]
pub struct SkipResponse {
    pub skipped: bool,
    pub reason: SkipReason,
}

impl SkipResponse {
    /// Creates a suppression response for the given reason.
    pub fn new(reason: SkipReason) -> Self {
        Self {
            skipped: true,
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_response_wire_format() {
        let response = SkipResponse::new(SkipReason::RecipientInChat);
        let json = serde_json::to_value(&response).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"skipped": true, "reason": "recipient_in_chat"})
        );
    }
}
