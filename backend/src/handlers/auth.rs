//! Authentication handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use validator::Validate;

use crate::error::AppError;
use crate::models::AuthResponse;
use crate::services::auth::{AuthService, RegisterInput};
use crate::AppState;
use shared::types::Role;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "first name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "last name is required"))]
    pub last_name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    pub phone_number: Option<String>,
    pub role: Role,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    input.validate()?;

    let service = AuthService::new(state.db.clone(), &state.config);
    let response = service
        .register(RegisterInput {
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            password: input.password,
            phone_number: input.phone_number,
            role: input.role,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    input.validate()?;

    let service = AuthService::new(state.db.clone(), &state.config);
    let response = service.login(&input.email, &input.password).await?;

    Ok(Json(response))
}
