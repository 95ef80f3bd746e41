//! Error handler for converting AppError to HTTP responses.
//!
//! Implements the IntoResponse trait for AppError, providing consistent
//! error response formatting across the API, plus a global middleware that
//! shapes framework-generated error responses (404, 405, oversized bodies)
//! into the same JSON format.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::RequestId;
use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    /// Converts an AppError into an HTTP response.
    ///
    /// # Status Code Mapping
    /// - MethodNotAllowed → 405
    /// - Unauthorized → 401
    /// - InvalidBody / MissingContent / MissingRecipients → 400
    /// - ProviderNotConfigured → 500
    /// - ProviderTimeout → 504
    /// - Configuration → 500
    /// - Internal → 500 (with a string rendering of the source, never a raw
    ///   backtrace or credentials)
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);

        let error_response = match &self {
            AppError::Internal { source } => {
                ErrorResponse::new("Internal server error").with_details(&format!("{:#}", source))
            }
            AppError::Configuration { key, .. } => {
                ErrorResponse::new("Internal server error")
                    .with_details(&format!("configuration error: {}", key))
            }
            other => ErrorResponse::new(&other.to_string()),
        };

        (status, Json(error_response)).into_response()
    }
}

/// Maps an AppError variant to its corresponding HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
        AppError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
        AppError::MissingContent => StatusCode::BAD_REQUEST,
        AppError::MissingRecipients => StatusCode::BAD_REQUEST,
        AppError::ProviderNotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::ProviderTimeout => StatusCode::GATEWAY_TIMEOUT,
        AppError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Global error handling middleware.
///
/// Catches error responses generated outside the AppError path (router 404s,
/// method-not-allowed fallbacks without a body, payload rejections) and
/// converts them to the standard `{error}` JSON body. Responses that already
/// carry a JSON body pass through untouched.
pub async fn global_error_handler(
    request: axum::extract::Request,
    next: axum::middleware::Next,
) -> Response {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone());

    let response = next.run(request).await;

    if !response.status().is_client_error() && !response.status().is_server_error() {
        return response;
    }

    // Already shaped by an AppError or handler; return as-is
    if let Some(content_type) = response.headers().get("content-type")
        && content_type
            .to_str()
            .unwrap_or("")
            .contains("application/json")
    {
        return response;
    }

    let status = response.status();
    let message = match status {
        StatusCode::NOT_FOUND => "Not found",
        StatusCode::METHOD_NOT_ALLOWED => "Method not allowed",
        StatusCode::PAYLOAD_TOO_LARGE => "Request payload too large",
        StatusCode::UNSUPPORTED_MEDIA_TYPE => "Unsupported media type",
        StatusCode::REQUEST_TIMEOUT => "Request timeout",
        _ => "Request failed",
    };

    let mut error_response = ErrorResponse::new(message);
    if let Some(id) = request_id {
        error_response = error_response.with_request_id(&id);
    }

    (status, Json(error_response)).into_response()
}
