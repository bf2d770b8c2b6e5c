use crate::schemas::{AppState, ErrorResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use store::{BulkHistoryEntry, CommonHistoryEntry};
use tracing::{error, info, instrument, warn};
use utoipa::ToSchema;

const NO_COMMON_HISTORY: &str = "The user has no common waste history";
// Bulk lookups answer with the same message as common ones.
const NO_BULK_HISTORY: &str = NO_COMMON_HISTORY;
const FETCH_HISTORY_FAILED: &str = "Failed to fetch the waste history";

/// One weighed disposal. `name` is null when the item no longer exists.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommonHistoryResponse {
    pub waste_item_id: i32,
    pub name: Option<String>,
    pub weight: f64,
}

impl From<CommonHistoryEntry> for CommonHistoryResponse {
    fn from(entry: CommonHistoryEntry) -> Self {
        Self {
            waste_item_id: entry.waste_item_id,
            name: entry.name,
            weight: entry.weight,
        }
    }
}

/// One counted disposal. `name` is null when the item no longer exists.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BulkHistoryResponse {
    pub waste_item_id: i32,
    pub name: Option<String>,
    pub units: f64,
}

impl From<BulkHistoryEntry> for BulkHistoryResponse {
    fn from(entry: BulkHistoryEntry) -> Self {
        Self {
            waste_item_id: entry.waste_item_id,
            name: entry.name,
            units: entry.units,
        }
    }
}

/// Get a user's common (weighed) waste history
#[utoipa::path(
    get,
    path = "/commonWasteHistory/{username}",
    params(
        ("username" = String, Path, description = "Username")
    ),
    responses(
        (status = 200, description = "Common waste history of the user", body = Vec<CommonHistoryResponse>),
        (status = 404, description = "The user has no common waste history", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "waste"
)]
#[instrument(skip(state))]
pub async fn get_common_waste_history(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Vec<CommonHistoryResponse>>, (StatusCode, Json<ErrorResponse>)> {
    match store::common_history(&state.db, &username).await {
        Ok(entries) if entries.is_empty() => {
            warn!("No common waste history for {}", username);
            Err((StatusCode::NOT_FOUND, Json(ErrorResponse::new(NO_COMMON_HISTORY))))
        }
        Ok(entries) => {
            info!("Retrieved {} common history entries for {}", entries.len(), username);
            Ok(Json(entries.into_iter().map(CommonHistoryResponse::from).collect()))
        }
        Err(e) => {
            error!("Failed to fetch common waste history for {}: {}", username, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(FETCH_HISTORY_FAILED)),
            ))
        }
    }
}

/// Get a user's bulk (counted) waste history
#[utoipa::path(
    get,
    path = "/bulkWasteHistory/{username}",
    params(
        ("username" = String, Path, description = "Username")
    ),
    responses(
        (status = 200, description = "Bulk waste history of the user", body = Vec<BulkHistoryResponse>),
        (status = 404, description = "The user has no common waste history", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "waste"
)]
#[instrument(skip(state))]
pub async fn get_bulk_waste_history(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Vec<BulkHistoryResponse>>, (StatusCode, Json<ErrorResponse>)> {
    match store::bulk_history(&state.db, &username).await {
        Ok(entries) if entries.is_empty() => {
            warn!("No bulk waste history for {}", username);
            Err((StatusCode::NOT_FOUND, Json(ErrorResponse::new(NO_BULK_HISTORY))))
        }
        Ok(entries) => {
            info!("Retrieved {} bulk history entries for {}", entries.len(), username);
            Ok(Json(entries.into_iter().map(BulkHistoryResponse::from).collect()))
        }
        Err(e) => {
            error!("Failed to fetch bulk waste history for {}: {}", username, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(FETCH_HISTORY_FAILED)),
            ))
        }
    }
}
