//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use axum::{Router, middleware};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{global_error_handler, logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs first):
/// 1. Request ID middleware (runs first) - generates/propagates request IDs
/// 2. Logging middleware - logs requests with request IDs
/// 3. Global error handler - shapes framework-generated error responses
///
/// # Routes
/// - `POST /api/push` - The relay endpoint (bearer gate applied on the route)
/// - `GET /health`, `/health/ready`, `/health/live` - probes, no auth
/// - `/swagger-ui` - OpenAPI documentation
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new().merge(handlers::push::push_routes());

    Router::new()
        .nest("/api", api_routes)
        .merge(handlers::health::health_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Middleware is applied in reverse order - last added runs first
        .layer(middleware::from_fn(global_error_handler))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
