//! Bearer-presence authentication middleware.
//!
//! The relay sits behind an edge proxy that has already authenticated the
//! caller, so this gate only checks that an `Authorization: Bearer` header
//! is present and well-shaped. The token is never validated against any
//! identity system here.

use axum::{
    extract::Request,
    http::{Method, header},
    middleware::Next,
    response::Response,
};

use crate::error::AppError;

/// Middleware enforcing the presence of a bearer Authorization header.
///
/// # Errors
/// Returns 401 Unauthorized if:
/// - Authorization header is missing
/// - Header value does not start with `Bearer `
pub async fn bearer_gate_middleware(request: Request, next: Next) -> Result<Response, AppError> {
    // The method gate answers non-POST traffic with 405 before any auth check
    if request.method() != Method::POST {
        return Ok(next.run(request).await);
    }

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized {
            message: "missing Authorization Bearer".to_string(),
        })?;

    if !auth_header.starts_with("Bearer ") {
        return Err(AppError::Unauthorized {
            message: "invalid Authorization header format, expected: Bearer <token>".to_string(),
        });
    }

    Ok(next.run(request).await)
}
