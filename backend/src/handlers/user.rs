//! User account handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::models::UserDto;
use crate::services::user::{UpdateUserInput, UserService};
use crate::AppState;
use shared::access;

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<UserDto>>, AppError> {
    user.require_any(access::LIST_USERS)?;

    let service = UserService::new(state.db.clone());
    Ok(Json(service.get_all().await?))
}

/// GET /api/users/:id
pub async fn get_user(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<UserDto>, AppError> {
    let service = UserService::new(state.db.clone());
    Ok(Json(service.get_by_id(id).await?))
}

/// PUT /api/users/:id
pub async fn update_user(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(id): Path<i64>,
    Json(input): Json<UpdateUserInput>,
) -> Result<Json<UserDto>, AppError> {
    let service = UserService::new(state.db.clone());
    Ok(Json(service.update(id, input).await?))
}

/// DELETE /api/users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    user.require_any(access::DELETE_USER)?;

    let service = UserService::new(state.db.clone());
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
