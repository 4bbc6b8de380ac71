//! REST API layer: route handlers, DTOs, router composition and the
//! OpenAPI document.
//!
//! Waitlist endpoints are mounted under `/api/waitlist`; the health check
//! lives at `/health`.

pub mod dto;
pub mod handlers;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI description of every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "waitlist-gateway",
        description = "Collects waitlist signups and reports signup counts."
    ),
    paths(
        handlers::waitlist::join_waitlist,
        handlers::waitlist::waitlist_count,
        handlers::system::health_handler,
    ),
    components(schemas(
        dto::SignupRequest,
        dto::SignupResponse,
        dto::CountResponse,
        handlers::system::HealthResponse,
        crate::error::ErrorResponse,
    )),
    tags(
        (name = "Waitlist", description = "Signup and count"),
        (name = "System", description = "Operational endpoints"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .merge(handlers::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    router
}

/// Builds the ready-to-serve application: routes, request tracing, and a
/// CORS policy that admits any origin.
pub fn build_app(state: AppState) -> Router {
    build_router()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
