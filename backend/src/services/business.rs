//! Business service
//!
//! CRUD and lookups for the businesses that publish franchise offerings. A
//! business always belongs to an owner account, and the owner link cannot be
//! reassigned after creation.

use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::BusinessDto;
use shared::validation::validate_investment;

/// Business service
#[derive(Clone)]
pub struct BusinessService {
    db: PgPool,
}

#[derive(Debug, sqlx::FromRow)]
struct BusinessRow {
    id: i64,
    name: String,
    description: Option<String>,
    industry: Option<String>,
    location: Option<String>,
    logo: Option<String>,
    website: Option<String>,
    founded: Option<String>,
    investment_required: Option<Decimal>,
    number_of_locations: Option<i32>,
    owner_id: i64,
}

/// Input for creating a business.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBusinessInput {
    pub name: String,
    pub description: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub founded: Option<String>,
    pub investment_required: Option<Decimal>,
    pub number_of_locations: Option<i32>,
    pub owner_id: i64,
}

/// Input for updating a business. The owner link is immutable and absent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBusinessInput {
    pub name: String,
    pub description: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub founded: Option<String>,
    pub investment_required: Option<Decimal>,
    pub number_of_locations: Option<i32>,
}

const BUSINESS_COLUMNS: &str = "id, name, description, industry, location, logo, website, \
     founded, investment_required, number_of_locations, owner_id";

impl BusinessService {
    /// Create a new BusinessService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List all businesses.
    pub async fn get_all(&self) -> AppResult<Vec<BusinessDto>> {
        let rows = sqlx::query_as::<_, BusinessRow>(&format!(
            "SELECT {} FROM businesses ORDER BY id ASC",
            BUSINESS_COLUMNS
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(map_to_dto).collect())
    }

    /// Get a business by id.
    pub async fn get_by_id(&self, id: i64) -> AppResult<BusinessDto> {
        let row = sqlx::query_as::<_, BusinessRow>(&format!(
            "SELECT {} FROM businesses WHERE id = $1",
            BUSINESS_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::not_found("Business", id))?;

        Ok(map_to_dto(row))
    }

    /// List the businesses owned by an account. The owner must exist.
    pub async fn get_by_owner(&self, owner_id: i64) -> AppResult<Vec<BusinessDto>> {
        self.require_owner(owner_id).await?;

        let rows = sqlx::query_as::<_, BusinessRow>(&format!(
            "SELECT {} FROM businesses WHERE owner_id = $1 ORDER BY id ASC",
            BUSINESS_COLUMNS
        ))
        .bind(owner_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(map_to_dto).collect())
    }

    /// Case-insensitive substring search over the industry field.
    pub async fn get_by_industry(&self, industry: &str) -> AppResult<Vec<BusinessDto>> {
        let rows = sqlx::query_as::<_, BusinessRow>(&format!(
            "SELECT {} FROM businesses WHERE industry ILIKE $1 ORDER BY id ASC",
            BUSINESS_COLUMNS
        ))
        .bind(format!("%{}%", industry))
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(map_to_dto).collect())
    }

    /// Create a business for an existing owner.
    pub async fn create(&self, input: CreateBusinessInput) -> AppResult<BusinessDto> {
        self.require_owner(input.owner_id).await?;

        if let Some(investment) = input.investment_required {
            validate_investment(investment)
                .map_err(|msg| AppError::validation("investmentRequired", msg))?;
        }

        let row = sqlx::query_as::<_, BusinessRow>(&format!(
            r#"
            INSERT INTO businesses (name, description, industry, location, logo, website,
                                    founded, investment_required, number_of_locations, owner_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            BUSINESS_COLUMNS
        ))
        .bind(&input.name)
        .bind(&input.description)
        .bind(&input.industry)
        .bind(&input.location)
        .bind(&input.logo)
        .bind(&input.website)
        .bind(&input.founded)
        .bind(input.investment_required)
        .bind(input.number_of_locations)
        .bind(input.owner_id)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(business_id = row.id, owner_id = row.owner_id, "created business");
        Ok(map_to_dto(row))
    }

    /// Overwrite the mutable fields of a business.
    pub async fn update(&self, id: i64, input: UpdateBusinessInput) -> AppResult<BusinessDto> {
        if let Some(investment) = input.investment_required {
            validate_investment(investment)
                .map_err(|msg| AppError::validation("investmentRequired", msg))?;
        }

        let row = sqlx::query_as::<_, BusinessRow>(&format!(
            r#"
            UPDATE businesses
            SET name = $1, description = $2, industry = $3, location = $4, logo = $5,
                website = $6, founded = $7, investment_required = $8, number_of_locations = $9
            WHERE id = $10
            RETURNING {}
            "#,
            BUSINESS_COLUMNS
        ))
        .bind(&input.name)
        .bind(&input.description)
        .bind(&input.industry)
        .bind(&input.location)
        .bind(&input.logo)
        .bind(&input.website)
        .bind(&input.founded)
        .bind(input.investment_required)
        .bind(input.number_of_locations)
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::not_found("Business", id))?;

        Ok(map_to_dto(row))
    }

    /// Delete a business and, through the schema, its franchises and their
    /// applications.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM businesses WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Business", id));
        }

        Ok(())
    }

    async fn require_owner(&self, owner_id: i64) -> AppResult<()> {
        let exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = $1")
            .bind(owner_id)
            .fetch_one(&self.db)
            .await?;

        if exists == 0 {
            return Err(AppError::not_found("User", owner_id));
        }

        Ok(())
    }
}

fn map_to_dto(row: BusinessRow) -> BusinessDto {
    BusinessDto {
        id: row.id,
        name: row.name,
        description: row.description,
        industry: row.industry,
        location: row.location,
        logo: row.logo,
        website: row.website,
        founded: row.founded,
        investment_required: row.investment_required,
        number_of_locations: row.number_of_locations,
        owner_id: row.owner_id,
    }
}
