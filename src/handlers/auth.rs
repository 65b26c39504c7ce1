use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::handlers::common::{validate_password, validate_required};
use crate::models::Identity;
use crate::services::AuthService;
use crate::state::AppState;

// ============ Request/Response DTOs ============

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

// ============ Handlers ============

/// Login with email and password
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = Identity),
        (status = 400, description = "Invalid email or password"),
        (status = 500, description = "Unexpected failure")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<Identity>> {
    let Json(payload) = payload?;
    let email = validate_required("email", payload.email)?;
    let password = validate_password(payload.password)?;

    let identity = AuthService::login(&state.db, &email, &password).await?;
    Ok(Json(identity))
}
