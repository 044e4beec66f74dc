//! Franchise handlers (authenticated surface)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::AppError;
use crate::middleware::CurrentUser;
use crate::models::FranchiseDto;
use crate::services::franchise::{CreateFranchiseInput, FranchiseService, UpdateFranchiseInput};
use crate::AppState;
use shared::access;

#[derive(Debug, Deserialize)]
pub struct InvestmentQuery {
    #[serde(rename = "maxInvestment")]
    pub max_investment: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub country: String,
    pub city: Option<String>,
}

/// GET /api/franchises
pub async fn list_franchises(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
) -> Result<Json<Vec<FranchiseDto>>, AppError> {
    let service = FranchiseService::new(state.db.clone());
    Ok(Json(service.get_all().await?))
}

/// GET /api/franchises/:id
pub async fn get_franchise(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<FranchiseDto>, AppError> {
    let service = FranchiseService::new(state.db.clone());
    Ok(Json(service.get_by_id(id).await?))
}

/// GET /api/franchises/business/:business_id
pub async fn list_franchises_by_business(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(business_id): Path<i64>,
) -> Result<Json<Vec<FranchiseDto>>, AppError> {
    let service = FranchiseService::new(state.db.clone());
    Ok(Json(service.get_by_business(business_id).await?))
}

/// GET /api/franchises/industry/:industry
pub async fn list_franchises_by_industry(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Path(industry): Path<String>,
) -> Result<Json<Vec<FranchiseDto>>, AppError> {
    let service = FranchiseService::new(state.db.clone());
    Ok(Json(service.get_by_industry(&industry).await?))
}

/// GET /api/franchises/investment?maxInvestment=...
pub async fn list_franchises_by_investment(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Query(query): Query<InvestmentQuery>,
) -> Result<Json<Vec<FranchiseDto>>, AppError> {
    let service = FranchiseService::new(state.db.clone());
    Ok(Json(service.get_by_max_investment(query.max_investment).await?))
}

/// GET /api/franchises/location?country=...&city=...
pub async fn list_franchises_by_location(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Query(query): Query<LocationQuery>,
) -> Result<Json<Vec<FranchiseDto>>, AppError> {
    let service = FranchiseService::new(state.db.clone());
    let city = query.city.unwrap_or_default();
    Ok(Json(service.get_by_location(&query.country, &city).await?))
}

/// POST /api/franchises
pub async fn create_franchise(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<CreateFranchiseInput>,
) -> Result<(StatusCode, Json<FranchiseDto>), AppError> {
    user.require_any(access::CREATE_FRANCHISE)?;

    let service = FranchiseService::new(state.db.clone());
    let franchise = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(franchise)))
}

/// PUT /api/franchises/:id
pub async fn update_franchise(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
    Json(input): Json<UpdateFranchiseInput>,
) -> Result<Json<FranchiseDto>, AppError> {
    user.require_any(access::UPDATE_FRANCHISE)?;

    let service = FranchiseService::new(state.db.clone());
    Ok(Json(service.update(id, input).await?))
}

/// DELETE /api/franchises/:id
pub async fn delete_franchise(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    user.require_any(access::DELETE_FRANCHISE)?;

    let service = FranchiseService::new(state.db.clone());
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
