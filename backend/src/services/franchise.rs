//! Franchise service
//!
//! CRUD and discovery queries for franchise offerings. Every franchise hangs
//! off a business, and the business link is fixed at creation.

use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::FranchiseDto;
use shared::validation::{validate_contract_length, validate_investment};

/// Franchise service
#[derive(Clone)]
pub struct FranchiseService {
    db: PgPool,
}

#[derive(Debug, sqlx::FromRow)]
struct FranchiseRow {
    id: i64,
    name: String,
    description: Option<String>,
    industry: Option<String>,
    country: Option<String>,
    city: Option<String>,
    logo: Option<String>,
    initial_investment: Option<Decimal>,
    ongoing_fees: Option<Decimal>,
    requirements: Option<String>,
    support_provided: Option<String>,
    training_program: Option<String>,
    contract_length: Option<i32>,
    business_id: i64,
}

/// Input for creating a franchise offering.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFranchiseInput {
    pub name: String,
    pub description: Option<String>,
    pub industry: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub logo: Option<String>,
    pub initial_investment: Option<Decimal>,
    pub ongoing_fees: Option<Decimal>,
    pub requirements: Option<String>,
    pub support_provided: Option<String>,
    pub training_program: Option<String>,
    pub contract_length: Option<i32>,
    pub business_id: i64,
}

/// Input for updating a franchise. The business link is immutable and absent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFranchiseInput {
    pub name: String,
    pub description: Option<String>,
    pub industry: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub logo: Option<String>,
    pub initial_investment: Option<Decimal>,
    pub ongoing_fees: Option<Decimal>,
    pub requirements: Option<String>,
    pub support_provided: Option<String>,
    pub training_program: Option<String>,
    pub contract_length: Option<i32>,
}

const FRANCHISE_COLUMNS: &str = "id, name, description, industry, country, city, logo, \
     initial_investment, ongoing_fees, requirements, support_provided, training_program, \
     contract_length, business_id";

impl FranchiseService {
    /// Create a new FranchiseService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List all franchise offerings.
    pub async fn get_all(&self) -> AppResult<Vec<FranchiseDto>> {
        let rows = sqlx::query_as::<_, FranchiseRow>(&format!(
            "SELECT {} FROM franchises ORDER BY id ASC",
            FRANCHISE_COLUMNS
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(map_to_dto).collect())
    }

    /// Get a franchise by id.
    pub async fn get_by_id(&self, id: i64) -> AppResult<FranchiseDto> {
        let row = sqlx::query_as::<_, FranchiseRow>(&format!(
            "SELECT {} FROM franchises WHERE id = $1",
            FRANCHISE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::not_found("Franchise", id))?;

        Ok(map_to_dto(row))
    }

    /// List the offerings published by a business. The business must exist.
    pub async fn get_by_business(&self, business_id: i64) -> AppResult<Vec<FranchiseDto>> {
        self.require_business(business_id).await?;

        let rows = sqlx::query_as::<_, FranchiseRow>(&format!(
            "SELECT {} FROM franchises WHERE business_id = $1 ORDER BY id ASC",
            FRANCHISE_COLUMNS
        ))
        .bind(business_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(map_to_dto).collect())
    }

    /// Case-insensitive substring search over the industry field.
    pub async fn get_by_industry(&self, industry: &str) -> AppResult<Vec<FranchiseDto>> {
        let rows = sqlx::query_as::<_, FranchiseRow>(&format!(
            "SELECT {} FROM franchises WHERE industry ILIKE $1 ORDER BY id ASC",
            FRANCHISE_COLUMNS
        ))
        .bind(format!("%{}%", industry))
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(map_to_dto).collect())
    }

    /// Offerings whose initial investment is at or below the given ceiling.
    pub async fn get_by_max_investment(&self, max: Decimal) -> AppResult<Vec<FranchiseDto>> {
        let rows = sqlx::query_as::<_, FranchiseRow>(&format!(
            "SELECT {} FROM franchises WHERE initial_investment <= $1 ORDER BY id ASC",
            FRANCHISE_COLUMNS
        ))
        .bind(max)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(map_to_dto).collect())
    }

    /// Case-insensitive exact match on country and city. Callers with no city
    /// pass an empty string, which matches nothing.
    pub async fn get_by_location(&self, country: &str, city: &str) -> AppResult<Vec<FranchiseDto>> {
        let rows = sqlx::query_as::<_, FranchiseRow>(&format!(
            "SELECT {} FROM franchises WHERE LOWER(country) = LOWER($1) AND LOWER(city) = LOWER($2) ORDER BY id ASC",
            FRANCHISE_COLUMNS
        ))
        .bind(country)
        .bind(city)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(map_to_dto).collect())
    }

    /// Create an offering under an existing business.
    pub async fn create(&self, input: CreateFranchiseInput) -> AppResult<FranchiseDto> {
        self.require_business(input.business_id).await?;
        validate_amounts(
            input.initial_investment,
            input.ongoing_fees,
            input.contract_length,
        )?;

        let row = sqlx::query_as::<_, FranchiseRow>(&format!(
            r#"
            INSERT INTO franchises (name, description, industry, country, city, logo,
                                    initial_investment, ongoing_fees, requirements,
                                    support_provided, training_program, contract_length,
                                    business_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING {}
            "#,
            FRANCHISE_COLUMNS
        ))
        .bind(&input.name)
        .bind(&input.description)
        .bind(&input.industry)
        .bind(&input.country)
        .bind(&input.city)
        .bind(&input.logo)
        .bind(input.initial_investment)
        .bind(input.ongoing_fees)
        .bind(&input.requirements)
        .bind(&input.support_provided)
        .bind(&input.training_program)
        .bind(input.contract_length)
        .bind(input.business_id)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(
            franchise_id = row.id,
            business_id = row.business_id,
            "created franchise offering"
        );
        Ok(map_to_dto(row))
    }

    /// Overwrite the mutable fields of an offering.
    pub async fn update(&self, id: i64, input: UpdateFranchiseInput) -> AppResult<FranchiseDto> {
        validate_amounts(
            input.initial_investment,
            input.ongoing_fees,
            input.contract_length,
        )?;

        let row = sqlx::query_as::<_, FranchiseRow>(&format!(
            r#"
            UPDATE franchises
            SET name = $1, description = $2, industry = $3, country = $4, city = $5,
                logo = $6, initial_investment = $7, ongoing_fees = $8, requirements = $9,
                support_provided = $10, training_program = $11, contract_length = $12
            WHERE id = $13
            RETURNING {}
            "#,
            FRANCHISE_COLUMNS
        ))
        .bind(&input.name)
        .bind(&input.description)
        .bind(&input.industry)
        .bind(&input.country)
        .bind(&input.city)
        .bind(&input.logo)
        .bind(input.initial_investment)
        .bind(input.ongoing_fees)
        .bind(&input.requirements)
        .bind(&input.support_provided)
        .bind(&input.training_program)
        .bind(input.contract_length)
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::not_found("Franchise", id))?;

        Ok(map_to_dto(row))
    }

    /// Delete an offering and, through the schema, its applications.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM franchises WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Franchise", id));
        }

        Ok(())
    }

    async fn require_business(&self, business_id: i64) -> AppResult<()> {
        let exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM businesses WHERE id = $1")
            .bind(business_id)
            .fetch_one(&self.db)
            .await?;

        if exists == 0 {
            return Err(AppError::not_found("Business", business_id));
        }

        Ok(())
    }
}

fn validate_amounts(
    initial_investment: Option<Decimal>,
    ongoing_fees: Option<Decimal>,
    contract_length: Option<i32>,
) -> AppResult<()> {
    if let Some(amount) = initial_investment {
        validate_investment(amount).map_err(|msg| AppError::validation("initialInvestment", msg))?;
    }
    if let Some(amount) = ongoing_fees {
        validate_investment(amount).map_err(|msg| AppError::validation("ongoingFees", msg))?;
    }
    if let Some(length) = contract_length {
        validate_contract_length(length)
            .map_err(|msg| AppError::validation("contractLength", msg))?;
    }
    Ok(())
}

fn map_to_dto(row: FranchiseRow) -> FranchiseDto {
    FranchiseDto {
        id: row.id,
        name: row.name,
        description: row.description,
        industry: row.industry,
        country: row.country,
        city: row.city,
        logo: row.logo,
        initial_investment: row.initial_investment,
        ongoing_fees: row.ongoing_fees,
        requirements: row.requirements,
        support_provided: row.support_provided,
        training_program: row.training_program,
        contract_length: row.contract_length,
        business_id: row.business_id,
    }
}
