use crate::schemas::{AppState, ErrorResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use model::entities::{category, waste_item};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};
use utoipa::ToSchema;

const FETCH_CATEGORIES_FAILED: &str = "Failed to fetch categories";
const NO_WASTE_ITEMS: &str = "No waste items are assigned to that category";
const FETCH_WASTE_ITEMS_FAILED: &str = "Failed to fetch the waste items";

/// Response structure for a waste category
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
    pub icon_name: String,
}

impl From<category::Model> for CategoryResponse {
    fn from(model: category::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            icon_name: model.icon_name,
        }
    }
}

/// Response structure for a waste item
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WasteItemResponse {
    pub id: i32,
    pub name: String,
    pub category_id: i32,
}

impl From<waste_item::Model> for WasteItemResponse {
    fn from(model: waste_item::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            category_id: model.category_id,
        }
    }
}

/// Get all categories
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "List of all categories", body = Vec<CategoryResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "reference"
)]
#[instrument(skip(state))]
pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategoryResponse>>, (StatusCode, Json<ErrorResponse>)> {
    debug!("Fetching all categories");

    match store::list_categories(&state.db).await {
        Ok(categories) => {
            info!("Retrieved {} categories", categories.len());
            Ok(Json(categories.into_iter().map(CategoryResponse::from).collect()))
        }
        Err(e) => {
            error!("Failed to fetch categories: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(FETCH_CATEGORIES_FAILED)),
            ))
        }
    }
}

/// Get the waste items of one category
///
/// A category id that is not a number matches no items.
#[utoipa::path(
    get,
    path = "/wasteItems/{categoryID}",
    params(
        ("categoryID" = String, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Waste items of the category", body = Vec<WasteItemResponse>),
        (status = 404, description = "No waste items are assigned to the category", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "reference"
)]
#[instrument(skip(state))]
pub async fn get_waste_items(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<Json<Vec<WasteItemResponse>>, (StatusCode, Json<ErrorResponse>)> {
    debug!("Fetching waste items for category: {}", category_id);

    let items = match category_id.parse::<i32>() {
        Ok(id) => store::waste_items_by_category(&state.db, id).await,
        Err(_) => {
            debug!("Category id {} is not numeric", category_id);
            Ok(Vec::new())
        }
    };

    match items {
        Ok(items) if items.is_empty() => {
            warn!("No waste items found for category {}", category_id);
            Err((StatusCode::NOT_FOUND, Json(ErrorResponse::new(NO_WASTE_ITEMS))))
        }
        Ok(items) => {
            info!("Retrieved {} waste items for category {}", items.len(), category_id);
            Ok(Json(items.into_iter().map(WasteItemResponse::from).collect()))
        }
        Err(e) => {
            error!("Failed to fetch waste items for category {}: {}", category_id, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(FETCH_WASTE_ITEMS_FAILED)),
            ))
        }
    }
}
