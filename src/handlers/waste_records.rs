use crate::schemas::{AppState, ErrorResponse, MessageResponse};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use store::NewWasteRecord;
use tracing::{debug, info, instrument, warn};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

const RECORD_FIELDS_REQUIRED: &str =
    "Username, waste item, unit of measurement, and category are required";
const RECORD_CREATED: &str = "Record created successfully";

/// Request body for logging a waste disposal
#[derive(Debug, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateWasteRecordRequest {
    #[validate(required, length(min = 1))]
    pub username: Option<String>,
    #[serde(rename = "wasteItemID")]
    #[validate(required)]
    pub waste_item_id: Option<i32>,
    /// Weight for common waste categories, unit count for every other category
    #[serde(rename = "unitOfMeasurement")]
    #[validate(required)]
    pub unit_of_measurement: Option<f64>,
    /// Decides which history the record is written to
    #[serde(rename = "categoryID")]
    #[validate(required)]
    pub category_id: Option<i32>,
}

impl CreateWasteRecordRequest {
    fn into_new_record(self) -> Result<NewWasteRecord, ValidationErrors> {
        self.validate()?;

        // Presence checked by validate()
        Ok(NewWasteRecord {
            username: self.username.unwrap_or_default(),
            waste_item_id: self.waste_item_id.unwrap_or_default(),
            quantity: self.unit_of_measurement.unwrap_or_default(),
            category_id: self.category_id.unwrap_or_default(),
        })
    }
}

fn fields_required() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(RECORD_FIELDS_REQUIRED)),
    )
        .into_response()
}

/// Log a waste disposal in the user's common or bulk history
///
/// When the record cannot be stored the response carries a 500 status and no body.
#[utoipa::path(
    post,
    path = "/wasteRecords",
    request_body = CreateWasteRecordRequest,
    responses(
        (status = 201, description = "Record created", body = MessageResponse),
        (status = 400, description = "A required field is missing", body = ErrorResponse),
        (status = 500, description = "Record was not created, empty body")
    ),
    tag = "waste"
)]
#[instrument(skip(state, payload))]
pub async fn create_waste_record(
    State(state): State<AppState>,
    payload: Result<Json<CreateWasteRecordRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), Response> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected waste record body: {}", rejection.body_text());
        fields_required()
    })?;

    let record = request.into_new_record().map_err(|e| {
        warn!("Rejected waste record: {}", e);
        fields_required()
    })?;

    debug!(
        "Creating waste record for {} in category {}",
        record.username, record.category_id
    );

    if store::create_waste_record(&state.db, record).await {
        info!("Waste record created");
        Ok((StatusCode::CREATED, Json(MessageResponse::new(RECORD_CREATED))))
    } else {
        warn!("Waste record was not created");
        Err(StatusCode::INTERNAL_SERVER_ERROR.into_response())
    }
}
