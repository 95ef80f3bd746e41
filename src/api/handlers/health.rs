//! Health check endpoint handlers.
//!
//! This module provides health check functionality for monitoring and load
//! balancer health checks. The relay holds no database; checks report the
//! configuration state of its two collaborators without network I/O.

use crate::api::doc::HEALTH_TAG;
use crate::state::AppState;
use axum::{Router, extract::State, http::StatusCode, response::Json, routing::get};
use serde::Serialize;
use std::collections::HashMap;
use utoipa::ToSchema;

/// Health check response structure.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,
    /// Application version
    pub version: String,
    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
    /// Detailed checks for various components
    pub checks: HashMap<String, ComponentHealth>,
}

/// Health status enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// All systems operational
    Healthy,
    /// Some non-critical issues
    Degraded,
    /// Critical issues present
    Unhealthy,
}

/// Individual component health information.
#[derive(Debug, Serialize, ToSchema)]
pub struct ComponentHealth {
    /// Component status
    pub status: HealthStatus,
    /// Optional message with details
    pub message: Option<String>,
}

/// Creates health check routes.
///
/// # Routes
/// - `GET /health` - Basic health check
/// - `GET /health/ready` - Readiness probe
/// - `GET /health/live` - Liveness probe
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness_check))
        .route("/health/live", get(liveness_check))
}

/// Basic health check endpoint.
///
/// Reports the configuration state of the push provider and the datastore.
/// A missing provider credential degrades the service (every dispatch would
/// answer 500); a disabled datastore is normal operation without enrichment.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy or degraded", body = HealthResponse)
    ),
    tag = HEALTH_TAG
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let mut checks = HashMap::new();

    let provider = if state.services.relay.provider_configured() {
        ComponentHealth {
            status: HealthStatus::Healthy,
            message: Some("credentials configured".to_string()),
        }
    } else {
        ComponentHealth {
            status: HealthStatus::Degraded,
            message: Some("credentials missing, dispatch will fail".to_string()),
        }
    };

    let datastore = if state.services.relay.enrichment_enabled() {
        ComponentHealth {
            status: HealthStatus::Healthy,
            message: Some("presence/unread enrichment enabled".to_string()),
        }
    } else {
        ComponentHealth {
            status: HealthStatus::Healthy,
            message: Some("not configured, enrichment disabled".to_string()),
        }
    };

    let overall_status = if matches!(provider.status, HealthStatus::Degraded) {
        HealthStatus::Degraded
    } else {
        HealthStatus::Healthy
    };

    checks.insert("provider".to_string(), provider);
    checks.insert("datastore".to_string(), datastore);

    Json(HealthResponse {
        status: overall_status,
        version: state.settings.application.version.clone(),
        timestamp: jiff::Timestamp::now().to_string(),
        checks,
    })
}

/// Readiness probe endpoint.
///
/// Indicates whether the relay can usefully accept traffic: without provider
/// credentials every dispatch answers 500, so the relay reports not-ready.
#[utoipa::path(
    get,
    path = "/health/ready",
    responses(
        (status = 200, description = "Service is ready"),
        (status = 503, description = "Service is not ready")
    ),
    tag = HEALTH_TAG
)]
pub async fn readiness_check(State(state): State<AppState>) -> StatusCode {
    if state.services.relay.provider_configured() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// Liveness probe endpoint.
///
/// Indicates whether the service is alive and should not be restarted.
#[utoipa::path(
    get,
    path = "/health/live",
    responses(
        (status = 200, description = "Service is alive")
    ),
    tag = HEALTH_TAG
)]
pub async fn liveness_check() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_serialization() {
        let status = HealthStatus::Healthy;
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, "\"healthy\"");
    }

    #[tokio::test]
    async fn test_liveness_check() {
        let result = liveness_check().await;
        assert_eq!(result, StatusCode::OK);
    }

    #[test]
    fn test_component_health_creation() {
        let health = ComponentHealth {
            status: HealthStatus::Degraded,
            message: Some("credentials missing".to_string()),
        };

        assert_eq!(health.status, HealthStatus::Degraded);
        assert_eq!(health.message, Some("credentials missing".to_string()));
    }
}
