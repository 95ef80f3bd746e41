use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

pub const PUSH_TAG: &str = "Push";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pushrelay",
        description = "Chat push-notification relay",
    ),
    modifiers(&SecurityAddon),
    paths(
        crate::api::handlers::push::send_push,
        crate::api::handlers::health::health_check,
        crate::api::handlers::health::readiness_check,
        crate::api::handlers::health::liveness_check,
    ),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
            crate::api::dto::SkipResponse,
            crate::models::PushRequest,
            crate::api::handlers::health::HealthResponse,
        )
    ),
    tags(
        (name = PUSH_TAG, description = "Push relay endpoint"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some("Bearer token, presence-checked at the edge"))
                        .build(),
                ),
            )
        }
    }
}
