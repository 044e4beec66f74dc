//! Franchise application handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::models::ApplicationDto;
use crate::services::application::{
    ApplicationService, CreateApplicationInput, UpdateApplicationInput,
};
use crate::AppState;
use shared::access;

#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: Option<String>,
}

/// GET /api/applications
pub async fn list_applications(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<ApplicationDto>>, AppError> {
    user.require_any(access::LIST_APPLICATIONS)?;

    let service = ApplicationService::new(state.db.clone());
    Ok(Json(service.get_all().await?))
}

/// GET /api/applications/:id
pub async fn get_application(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<ApplicationDto>, AppError> {
    let service = ApplicationService::new(state.db.clone());
    Ok(Json(service.get_by_id(id).await?))
}

/// GET /api/applications/applicant/:applicant_id
pub async fn list_applications_by_applicant(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(applicant_id): Path<i64>,
) -> Result<Json<Vec<ApplicationDto>>, AppError> {
    let service = ApplicationService::new(state.db.clone());
    Ok(Json(service.get_by_applicant(applicant_id).await?))
}

/// GET /api/applications/franchise/:franchise_id
pub async fn list_applications_by_franchise(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(franchise_id): Path<i64>,
) -> Result<Json<Vec<ApplicationDto>>, AppError> {
    user.require_any(access::LIST_APPLICATIONS_BY_FRANCHISE)?;

    let service = ApplicationService::new(state.db.clone());
    Ok(Json(service.get_by_franchise(franchise_id).await?))
}

/// GET /api/applications/status/:status
pub async fn list_applications_by_status(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(status): Path<String>,
) -> Result<Json<Vec<ApplicationDto>>, AppError> {
    let service = ApplicationService::new(state.db.clone());
    Ok(Json(service.get_by_status(&status).await?))
}

/// POST /api/applications
pub async fn create_application(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<CreateApplicationInput>,
) -> Result<(StatusCode, Json<ApplicationDto>), AppError> {
    user.require_any(access::CREATE_APPLICATION)?;

    let service = ApplicationService::new(state.db.clone());
    let application = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(application)))
}

/// PATCH /api/applications/:id/status
pub async fn update_application_status(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
    Json(input): Json<StatusUpdateRequest>,
) -> Result<Json<ApplicationDto>, AppError> {
    user.require_any(access::UPDATE_APPLICATION_STATUS)?;

    let status = input
        .status
        .ok_or_else(|| AppError::validation("status", "status is required"))?;

    let service = ApplicationService::new(state.db.clone());
    let allowed = state.config.application.allowed_statuses.as_deref();
    Ok(Json(service.update_status(id, &status, allowed).await?))
}

/// PUT /api/applications/:id
pub async fn update_application(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
    Json(input): Json<UpdateApplicationInput>,
) -> Result<Json<ApplicationDto>, AppError> {
    user.require_any(access::UPDATE_APPLICATION)?;

    let service = ApplicationService::new(state.db.clone());
    Ok(Json(service.update(id, input).await?))
}

/// DELETE /api/applications/:id
pub async fn delete_application(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let service = ApplicationService::new(state.db.clone());
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
