use crate::schemas::{AppState, ErrorResponse, MessageResponse};
use axum::{
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use model::entities::account;
use serde::{Deserialize, Serialize};
use store::{NewAccount, Registration};
use tracing::{debug, error, info, instrument, warn};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationErrors};

const CREDENTIALS_REQUIRED: &str = "Email and password are required";
const USER_NOT_FOUND: &str = "User not found";
const FETCH_USER_FAILED: &str = "Failed to fetch user";
const REGISTRATION_FIELDS_REQUIRED: &str = "Username, password, and email are required";
const REGISTRATION_FAILED: &str = "Failed to register user";
const USER_REGISTERED: &str = "User registered successfully";
const USER_EXISTS: &str = "User already exists";

/// Query parameters for the credential lookup
#[derive(Debug, Default, Deserialize, Serialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CredentialsQuery {
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

/// Request body for registering a new user
#[derive(Debug, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(required, length(min = 1))]
    pub username: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
    /// Login identity, must not belong to an existing account
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
}

impl RegisterRequest {
    fn into_new_account(self) -> Result<NewAccount, ValidationErrors> {
        self.validate()?;

        // Presence checked by validate()
        Ok(NewAccount {
            username: self.username.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
        })
    }
}

/// Account as stored, password included
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AccountResponse {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub email: String,
    pub activation_code: String,
    pub admin: String,
}

impl From<account::Model> for AccountResponse {
    fn from(model: account::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            password: model.password,
            email: model.email,
            activation_code: model.activation_code,
            admin: model.admin,
        }
    }
}

/// Look up the account matching an email and password
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    params(CredentialsQuery),
    responses(
        (status = 200, description = "Account found", body = AccountResponse),
        (status = 400, description = "Email or password missing", body = ErrorResponse),
        (status = 404, description = "No account matches", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, query))]
pub async fn get_user(
    State(state): State<AppState>,
    Query(query): Query<CredentialsQuery>,
) -> Result<Json<AccountResponse>, (StatusCode, Json<ErrorResponse>)> {
    if let Err(e) = query.validate() {
        warn!("Rejected credential lookup: {}", e);
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(CREDENTIALS_REQUIRED)),
        ));
    }

    let email = query.email.unwrap_or_default();
    let password = query.password.unwrap_or_default();
    debug!("Looking up account for email: {}", email);

    match store::find_by_credentials(&state.db, &email, &password).await {
        Ok(Some(account)) => {
            info!("Account {} matched credentials", account.id);
            Ok(Json(AccountResponse::from(account)))
        }
        Ok(None) => {
            warn!("No account matches the credentials for {}", email);
            Err((StatusCode::NOT_FOUND, Json(ErrorResponse::new(USER_NOT_FOUND))))
        }
        Err(e) => {
            error!("Failed to look up account for {}: {}", email, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(FETCH_USER_FAILED)),
            ))
        }
    }
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/register",
    tag = "users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = MessageResponse),
        (status = 409, description = "An account with this email exists", body = MessageResponse),
        (status = 400, description = "Username, password or email missing", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, payload))]
pub async fn register_user(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), (StatusCode, Json<ErrorResponse>)> {
    let fields_required = || {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(REGISTRATION_FIELDS_REQUIRED)),
        )
    };

    // A missing, malformed or mistyped body counts as absent fields.
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected registration body: {}", rejection.body_text());
        fields_required()
    })?;

    let new_account = request.into_new_account().map_err(|e| {
        warn!("Rejected registration: {}", e);
        fields_required()
    })?;

    let email = new_account.email.clone();
    debug!("Registering account for email: {}", email);

    match store::register_account(&state.db, new_account).await {
        Ok(Registration::Created) => {
            info!("Registered account for {}", email);
            Ok((StatusCode::CREATED, Json(MessageResponse::new(USER_REGISTERED))))
        }
        Ok(Registration::AlreadyExists) => {
            warn!("Account for {} already exists", email);
            Ok((StatusCode::CONFLICT, Json(MessageResponse::new(USER_EXISTS))))
        }
        Err(e) => {
            error!("Failed to register account for {}: {}", email, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(REGISTRATION_FAILED)),
            ))
        }
    }
}
