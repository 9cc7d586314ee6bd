//! API request handlers

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::routes::AppState;
use crate::error::Error;
use crate::representation::negotiate;
use crate::store::parse_tour_id;
use crate::types::{Tour, TourPatch};

pub const NO_SUCH_TOUR: &str = "No such tour exists.";

// Query parameters

#[derive(Debug, Deserialize, IntoParams)]
pub struct UpdateParams {
    /// New tour name (empty means unchanged)
    pub name: Option<String>,
    /// New tour price (empty means unchanged)
    pub price: Option<String>,
}

impl UpdateParams {
    fn into_patch(self) -> Result<TourPatch, Error> {
        let name = self.name.filter(|n| !n.is_empty());
        let price = match self.price.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<f64>()
                    .ok()
                    .filter(|p| p.is_finite())
                    .ok_or_else(|| Error::InvalidPrice(raw.to_string()))?,
            ),
        };
        Ok(TourPatch { name, price })
    }
}

// Response types

#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse {
    /// Always true
    pub success: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
    /// Number of tours in the catalogue
    pub tours: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Map a store failure onto the configured not-found convention
fn tour_error(state: &AppState, err: Error) -> ApiError {
    match err {
        Error::TourNotFound(id) => {
            tracing::debug!("No tour with id {:?}", id);
            let status = if state.legacy_status_codes {
                StatusCode::OK
            } else {
                StatusCode::NOT_FOUND
            };
            error_response(status, NO_SUCH_TOUR)
        }
        Error::InvalidPrice(raw) => {
            tracing::debug!("Rejected price {:?}", raw);
            error_response(StatusCode::BAD_REQUEST, "Invalid price.")
        }
        other => {
            tracing::error!("Tour operation failed: {}", other);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &other.to_string())
        }
    }
}

// Handlers

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        tours: state.store.len().await,
    })
}

/// List all tours in the representation picked from the Accept header
#[utoipa::path(
    get,
    path = "/api/tours",
    params(
        ("Accept" = Option<String>, Header, description = "application/json, application/xml, text/xml or text/plain")
    ),
    responses(
        (status = 200, description = "Tour catalogue", body = Vec<Tour>),
        (status = 406, description = "No supported representation is acceptable")
    ),
    tag = "tours"
)]
pub async fn list_tours(State(state): State<AppState>, headers: HeaderMap) -> Response {
    // Only an absent header accepts anything; an unreadable one accepts nothing
    let accept = match headers.get(header::ACCEPT).map(|value| value.to_str()) {
        None => None,
        Some(Ok(accept)) => Some(accept),
        Some(Err(_)) => {
            tracing::debug!("Unreadable Accept header");
            return StatusCode::NOT_ACCEPTABLE.into_response();
        }
    };

    let representation = match negotiate(accept) {
        Ok(rep) => rep,
        Err(e) => {
            tracing::debug!("{}", e);
            return StatusCode::NOT_ACCEPTABLE.into_response();
        }
    };

    tracing::debug!("Serving tours as {}", representation);
    let tours = state.store.list().await;
    let body = representation.render(&tours);

    (
        [(header::CONTENT_TYPE, representation.content_type())],
        body,
    )
        .into_response()
}

/// Update a tour's name and/or price
#[utoipa::path(
    put,
    path = "/api/tour/{id}",
    params(
        ("id" = String, Path, description = "Tour id"),
        UpdateParams
    ),
    responses(
        (status = 200, description = "Tour updated", body = SuccessResponse),
        (status = 400, description = "Invalid price", body = ErrorResponse),
        (status = 404, description = "Tour not found", body = ErrorResponse)
    ),
    tag = "tours"
)]
pub async fn update_tour(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<UpdateParams>,
) -> Result<Json<SuccessResponse>, ApiError> {
    tracing::info!("Updating tour {:?}", id);

    let id = parse_tour_id(&id).map_err(|e| tour_error(&state, e))?;

    // An unknown tour is reported as such, whatever the parameters say
    state
        .store
        .find_by_id(id)
        .await
        .map_err(|e| tour_error(&state, e))?;
    let patch = params.into_patch().map_err(|e| tour_error(&state, e))?;

    state
        .store
        .update(id, patch)
        .await
        .map_err(|e| tour_error(&state, e))?;

    Ok(Json(SuccessResponse { success: true }))
}

/// Delete a tour
#[utoipa::path(
    delete,
    path = "/api/tour/{id}",
    params(
        ("id" = String, Path, description = "Tour id")
    ),
    responses(
        (status = 200, description = "Tour deleted", body = SuccessResponse),
        (status = 404, description = "Tour not found", body = ErrorResponse)
    ),
    tag = "tours"
)]
pub async fn delete_tour(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let id = parse_tour_id(&id).map_err(|e| tour_error(&state, e))?;

    state
        .store
        .delete(id)
        .await
        .map_err(|e| tour_error(&state, e))?;

    Ok(Json(SuccessResponse { success: true }))
}

/// Fallback for routes the API does not own
pub async fn not_found() -> ApiError {
    error_response(StatusCode::NOT_FOUND, "Not found")
}
