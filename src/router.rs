use crate::handlers::{
    categories::{get_categories, get_waste_items},
    health::health_check,
    users::{get_user, register_user},
    waste_history::{get_bulk_waste_history, get_common_waste_history},
    waste_records::create_waste_record,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // One origin, GET and POST only, cookies allowed
    let cors = CorsLayer::new()
        .allow_origin(state.allowed_origin.clone())
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Accounts
        .route("/users", get(get_user))
        .route("/register", post(register_user))
        // Reference data
        .route("/categories", get(get_categories))
        .route("/wasteItems/:categoryID", get(get_waste_items))
        // Waste history
        .route("/commonWasteHistory/:username", get(get_common_waste_history))
        .route("/bulkWasteHistory/:username", get(get_bulk_waste_history))
        .route("/wasteRecords", post(create_waste_record))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors),
        )
        .with_state(state)
}
