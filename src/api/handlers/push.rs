//! Push relay endpoint handler.
//!
//! The single relay route. Validation failures answer before any side
//! effect; a dispatched send forwards the provider's status and body
//! verbatim so the caller sees provider-specific error detail unchanged.

use axum::{
    Json, Router,
    body::{Body, Bytes},
    extract::State,
    http::{StatusCode, header},
    middleware,
    response::{IntoResponse, Response},
    routing::post,
};

use crate::api::dto::SkipResponse;
use crate::api::middleware::bearer_gate_middleware;
use crate::error::{AppError, AppResult};
use crate::models::PushRequest;
use crate::services::RelayOutcome;
use crate::state::AppState;

/// Creates the push relay route.
///
/// Routes:
/// - `POST /push` - Relay one push-send request
///
/// Non-POST methods on the path answer 405 before the bearer gate runs.
pub fn push_routes() -> Router<AppState> {
    Router::new()
        .route("/push", post(send_push).fallback(method_not_allowed))
        .route_layer(middleware::from_fn(bearer_gate_middleware))
}

/// POST /api/push - Relay a push-send request
///
/// Resolves recipients and localized content from the loose request body,
/// consults presence/unread state, and either suppresses the send or
/// forwards it to the push provider.
#[utoipa::path(
    post,
    path = "/api/push",
    tag = crate::api::doc::PUSH_TAG,
    request_body = PushRequest,
    responses(
        (status = 200, description = "Provider response forwarded verbatim, or suppression notice", body = SkipResponse),
        (status = 400, description = "Invalid body, missing contents, or missing recipients", body = crate::api::dto::ErrorResponse),
        (status = 401, description = "Missing bearer token", body = crate::api::dto::ErrorResponse),
        (status = 405, description = "Non-POST method", body = crate::api::dto::ErrorResponse),
        (status = 500, description = "Provider not configured or internal error", body = crate::api::dto::ErrorResponse),
        (status = 504, description = "Provider request timeout", body = crate::api::dto::ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
pub async fn send_push(State(state): State<AppState>, body: Bytes) -> AppResult<Response> {
    let request: PushRequest =
        serde_json::from_slice(&body).map_err(|e| AppError::InvalidBody {
            message: e.to_string(),
        })?;

    match state.services.relay.handle(request).await? {
        RelayOutcome::Skipped { reason } => {
            Ok((StatusCode::OK, Json(SkipResponse::new(reason))).into_response())
        }
        RelayOutcome::Dispatched(provider_response) => {
            // An out-of-range provider status degrades to 502
            let status = StatusCode::from_u16(provider_response.status)
                .unwrap_or(StatusCode::BAD_GATEWAY);

            Response::builder()
                .status(status)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(provider_response.body))
                .map_err(|e| AppError::Internal {
                    source: anyhow::Error::new(e).context("response construction failed"),
                })
        }
    }
}

/// Answers 405 for non-POST methods on the relay path.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
