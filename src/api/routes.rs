//! API route definitions

use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{self, ErrorResponse, HealthResponse, SuccessResponse};
use crate::config::Config;
use crate::error::Result;
use crate::store::TourStore;
use crate::types::Tour;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Meadowlark Tours API",
        version = "0.1.0",
        description = "Tour catalogue with content-negotiated listings"
    ),
    tags(
        (name = "tours", description = "Tour catalogue"),
        (name = "health", description = "Health checks")
    ),
    paths(
        handlers::health,
        handlers::list_tours,
        handlers::update_tour,
        handlers::delete_tour,
    ),
    components(schemas(
        Tour,
        SuccessResponse,
        ErrorResponse,
        HealthResponse,
    ))
)]
pub struct ApiDoc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<TourStore>,
    /// Answer unknown tours with 200 instead of 404
    pub legacy_status_codes: bool,
}

impl AppState {
    /// Build the state from config, seeding the store with its tours
    pub fn from_config(config: &Config) -> Result<Self> {
        let store = TourStore::new(config.tours.clone())?;
        Ok(Self {
            store: Arc::new(store),
            legacy_status_codes: config.api.legacy_status_codes,
        })
    }
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let openapi = ApiDoc::openapi();

    Router::new()
        // Tours
        .route("/api/tours", get(handlers::list_tours))
        .route(
            "/api/tour/{id}",
            put(handlers::update_tour).delete(handlers::delete_tour),
        )

        // Health
        .route("/health", get(handlers::health))

        // OpenAPI document and Swagger UI
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", openapi))

        .fallback(handlers::not_found)

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
