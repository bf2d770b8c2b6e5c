use axum::http::HeaderValue;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::handlers::{
    categories::{CategoryResponse, WasteItemResponse},
    users::{AccountResponse, RegisterRequest},
    waste_history::{BulkHistoryResponse, CommonHistoryResponse},
    waste_records::CreateWasteRecordRequest,
};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
    /// Origin allowed by the CORS layer
    pub allowed_origin: HeaderValue,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

/// Plain confirmation message
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
    /// Number of categories loaded, absent when they cannot be read
    pub categories: Option<u64>,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::users::get_user,
        crate::handlers::users::register_user,
        crate::handlers::categories::get_categories,
        crate::handlers::categories::get_waste_items,
        crate::handlers::waste_history::get_common_waste_history,
        crate::handlers::waste_history::get_bulk_waste_history,
        crate::handlers::waste_records::create_waste_record,
    ),
    components(
        schemas(
            ErrorResponse,
            MessageResponse,
            HealthResponse,
            AccountResponse,
            RegisterRequest,
            CategoryResponse,
            WasteItemResponse,
            CommonHistoryResponse,
            BulkHistoryResponse,
            CreateWasteRecordRequest,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "users", description = "Registration and credential lookup"),
        (name = "reference", description = "Waste categories and items"),
        (name = "waste", description = "Waste records and per-user history"),
    ),
    info(
        title = "Wastetrack API",
        description = "Household waste tracking API",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
