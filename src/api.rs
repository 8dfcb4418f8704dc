use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

use crate::db::Barangay;
use crate::services::recommendation_service::Recommendation;
use crate::services::{BarangayService, RecommendationError, RecommendationService, TreeService};

#[derive(Clone)]
pub struct AppState {
    pub barangay_service: BarangayService,
    pub tree_service: TreeService,
    pub recommendation_service: RecommendationService,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// API-level error; serialized as `{"message": ...}` with the matching
/// status code. Messages are part of the wire contract.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(&'static str),
    #[error("{0}")]
    NotFound(&'static str),
    #[error("Internal server error")]
    Internal,
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(ErrorBody {
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health))
        .route("/barangays", get(list_barangays))
        .route("/barangays/nearest", get(nearest_barangay))
        .route("/trees", get(list_trees))
        .route("/trees/recommend", post(recommend_trees))
        .with_state(state);

    Router::new().nest("/api", api_routes)
}

#[instrument(skip(_state))]
async fn health(State(_state): State<AppState>) -> impl IntoResponse {
    debug!("Health check requested");
    let response = HealthResponse {
        status: "healthy".to_string(),
    };
    (StatusCode::OK, Json(response))
}

#[instrument(skip(state))]
async fn list_barangays(State(state): State<AppState>) -> Result<Json<Vec<Barangay>>, ApiError> {
    debug!("Fetching barangay catalog");
    let barangays = state.barangay_service.list().await.map_err(|e| {
        error!("Failed to fetch barangays: {}", e);
        ApiError::Internal
    })?;

    info!("Retrieved {} barangays", barangays.len());
    Ok(Json(barangays))
}

#[derive(Debug, Deserialize)]
struct NearestQuery {
    lat: f64,
    lng: f64,
}

#[instrument(skip(state, coords))]
async fn nearest_barangay(
    State(state): State<AppState>,
    coords: Result<Query<NearestQuery>, QueryRejection>,
) -> Result<Json<Barangay>, ApiError> {
    let Query(coords) = coords.map_err(|e| {
        warn!("Rejected nearest-barangay query: {}", e);
        ApiError::InvalidInput("Invalid coordinates")
    })?;
    if !coords.lat.is_finite() || !coords.lng.is_finite() {
        warn!("Rejected non-finite coordinates: {:?}", coords);
        return Err(ApiError::InvalidInput("Invalid coordinates"));
    }

    debug!("Finding nearest barangay to ({}, {})", coords.lat, coords.lng);
    let nearest = state
        .barangay_service
        .find_nearest(coords.lat, coords.lng)
        .await
        .map_err(|e| {
            error!("Nearest-barangay lookup failed: {}", e);
            ApiError::Internal
        })?
        .ok_or_else(|| {
            warn!("Nearest-barangay lookup on empty catalog");
            ApiError::NotFound("No barangays found")
        })?;

    info!(
        "Nearest barangay to ({}, {}) is {} (id={})",
        coords.lat, coords.lng, nearest.name, nearest.id
    );
    Ok(Json(nearest))
}

#[instrument(skip(state))]
async fn list_trees(
    State(state): State<AppState>,
) -> Result<Json<Vec<crate::db::Tree>>, ApiError> {
    debug!("Fetching tree catalog");
    let trees = state.tree_service.list().await.map_err(|e| {
        error!("Failed to fetch trees: {}", e);
        ApiError::Internal
    })?;

    info!("Retrieved {} trees", trees.len());
    Ok(Json(trees))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecommendRequest {
    land_area_sqm: f64,
    barangay_id: i32,
}

#[instrument(skip(state, payload))]
async fn recommend_trees(
    State(state): State<AppState>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Result<Json<Recommendation>, ApiError> {
    let Json(request) = payload.map_err(|e| {
        warn!("Rejected recommendation body: {}", e);
        ApiError::InvalidInput("Invalid input")
    })?;
    // Validate before any core computation runs
    if !request.land_area_sqm.is_finite() || request.land_area_sqm < 1.0 {
        warn!("Rejected land area {}", request.land_area_sqm);
        return Err(ApiError::InvalidInput("Invalid input"));
    }

    debug!(
        "Recommending trees for barangay {} over {} sqm",
        request.barangay_id, request.land_area_sqm
    );
    let recommendation = state
        .recommendation_service
        .recommend(request.barangay_id, request.land_area_sqm)
        .await
        .map_err(|e| match e {
            RecommendationError::BarangayNotFound(id) => {
                warn!("Barangay {} not found", id);
                ApiError::NotFound("Barangay not found")
            }
            RecommendationError::Db(e) => {
                error!("Recommendation failed: {}", e);
                ApiError::Internal
            }
        })?;

    info!(
        "Recommended {} species (max {} trees) for barangay {}",
        recommendation.recommended_trees.len(),
        recommendation.max_trees,
        recommendation.barangay.id
    );
    Ok(Json(recommendation))
}
