//! Business handlers (authenticated surface)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::models::BusinessDto;
use crate::services::business::{BusinessService, CreateBusinessInput, UpdateBusinessInput};
use crate::AppState;
use shared::access;

/// GET /api/businesses
pub async fn list_businesses(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
) -> Result<Json<Vec<BusinessDto>>, AppError> {
    let service = BusinessService::new(state.db.clone());
    Ok(Json(service.get_all().await?))
}

/// GET /api/businesses/:id
pub async fn get_business(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<BusinessDto>, AppError> {
    let service = BusinessService::new(state.db.clone());
    Ok(Json(service.get_by_id(id).await?))
}

/// GET /api/businesses/owner/:owner_id
pub async fn list_businesses_by_owner(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(owner_id): Path<i64>,
) -> Result<Json<Vec<BusinessDto>>, AppError> {
    let service = BusinessService::new(state.db.clone());
    Ok(Json(service.get_by_owner(owner_id).await?))
}

/// GET /api/businesses/industry/:industry
pub async fn list_businesses_by_industry(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(industry): Path<String>,
) -> Result<Json<Vec<BusinessDto>>, AppError> {
    let service = BusinessService::new(state.db.clone());
    Ok(Json(service.get_by_industry(&industry).await?))
}

/// POST /api/businesses
pub async fn create_business(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<CreateBusinessInput>,
) -> Result<(StatusCode, Json<BusinessDto>), AppError> {
    user.require_any(access::CREATE_BUSINESS)?;

    let service = BusinessService::new(state.db.clone());
    let business = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(business)))
}

/// PUT /api/businesses/:id
pub async fn update_business(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
    Json(input): Json<UpdateBusinessInput>,
) -> Result<Json<BusinessDto>, AppError> {
    user.require_any(access::UPDATE_BUSINESS)?;

    let service = BusinessService::new(state.db.clone());
    Ok(Json(service.update(id, input).await?))
}

/// DELETE /api/businesses/:id
pub async fn delete_business(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    user.require_any(access::DELETE_BUSINESS)?;

    let service = BusinessService::new(state.db.clone());
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
