//! Unauthenticated browse surface
//!
//! Read-only views over businesses and franchises for visitors without an
//! account. No caller identity is involved here.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppError;
use crate::models::{BusinessDto, FranchiseDto};
use crate::services::business::BusinessService;
use crate::services::franchise::FranchiseService;
use crate::AppState;

/// GET /api/public/businesses
pub async fn list_businesses(
    State(state): State<AppState>,
) -> Result<Json<Vec<BusinessDto>>, AppError> {
    let service = BusinessService::new(state.db.clone());
    Ok(Json(service.get_all().await?))
}

/// GET /api/public/businesses/:id
pub async fn get_business(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BusinessDto>, AppError> {
    let service = BusinessService::new(state.db.clone());
    Ok(Json(service.get_by_id(id).await?))
}

/// GET /api/public/businesses/industry/:industry
pub async fn list_businesses_by_industry(
    State(state): State<AppState>,
    Path(industry): Path<String>,
) -> Result<Json<Vec<BusinessDto>>, AppError> {
    let service = BusinessService::new(state.db.clone());
    Ok(Json(service.get_by_industry(&industry).await?))
}

/// GET /api/public/franchises
pub async fn list_franchises(
    State(state): State<AppState>,
) -> Result<Json<Vec<FranchiseDto>>, AppError> {
    let service = FranchiseService::new(state.db.clone());
    Ok(Json(service.get_all().await?))
}

/// GET /api/public/franchises/:id
pub async fn get_franchise(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<FranchiseDto>, AppError> {
    let service = FranchiseService::new(state.db.clone());
    Ok(Json(service.get_by_id(id).await?))
}

/// GET /api/public/franchises/business/:business_id
pub async fn list_franchises_by_business(
    State(state): State<AppState>,
    Path(business_id): Path<i64>,
) -> Result<Json<Vec<FranchiseDto>>, AppError> {
    let service = FranchiseService::new(state.db.clone());
    Ok(Json(service.get_by_business(business_id).await?))
}
