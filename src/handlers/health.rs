use crate::schemas::{AppState, HealthResponse};
use axum::{extract::State, http::StatusCode, response::Json};
use model::entities::category;
use sea_orm::{EntityTrait, PaginatorTrait};
use tracing::{instrument, warn};

/// Report whether the database is reachable and the reference data readable
///
/// Answers 503 when either check fails, with the same body shape.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Database reachable, categories readable", body = HealthResponse),
        (status = 503, description = "Database or reference data unavailable", body = HealthResponse)
    )
)]
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let connected = match state.db.ping().await {
        Ok(()) => true,
        Err(e) => {
            warn!("Database ping failed: {}", e);
            false
        }
    };

    let categories = if connected {
        match category::Entity::find().count(&state.db).await {
            Ok(count) => Some(count),
            Err(e) => {
                warn!("Categories are not readable: {}", e);
                None
            }
        }
    } else {
        None
    };

    let healthy = categories.is_some();
    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: if connected { "connected" } else { "disconnected" }.to_string(),
        categories,
    };

    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(response))
}
