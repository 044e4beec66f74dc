//! User account service

use serde::Deserialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::UserDto;
use shared::types::Role;

/// User service for account lookups and profile management
#[derive(Clone)]
pub struct UserService {
    db: PgPool,
}

/// User record as stored
#[derive(Debug, sqlx::FromRow)]
pub struct UserRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub profile_image: Option<String>,
    pub role: String,
}

/// Input for updating a profile.
///
/// Email and role are immutable after registration and deliberately absent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserInput {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub profile_image: Option<String>,
}

const USER_COLUMNS: &str =
    "id, first_name, last_name, email, phone_number, profile_image, role";

impl UserService {
    /// Create a new UserService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List every account.
    pub async fn get_all(&self) -> AppResult<Vec<UserDto>> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {} FROM users ORDER BY id ASC",
            USER_COLUMNS
        ))
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(map_to_dto).collect()
    }

    /// Get a user by id.
    pub async fn get_by_id(&self, id: i64) -> AppResult<UserDto> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {} FROM users WHERE id = $1",
            USER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::not_found("User", id))?;

        map_to_dto(row)
    }

    /// Update the mutable profile fields of an account.
    pub async fn update(&self, id: i64, input: UpdateUserInput) -> AppResult<UserDto> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            UPDATE users
            SET first_name = $1, last_name = $2, phone_number = $3, profile_image = $4
            WHERE id = $5
            RETURNING {}
            "#,
            USER_COLUMNS
        ))
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.phone_number)
        .bind(&input.profile_image)
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::not_found("User", id))?;

        map_to_dto(row)
    }

    /// Delete an account. Fails with `NotFound` when the id does not resolve.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("User", id));
        }

        Ok(())
    }
}

/// Map a stored user to its transfer object, excluding the password hash.
pub fn map_to_dto(row: UserRow) -> AppResult<UserDto> {
    let role = Role::parse(&row.role)
        .ok_or_else(|| AppError::Internal(format!("unknown role in users table: {}", row.role)))?;

    Ok(UserDto {
        id: row.id,
        first_name: row.first_name,
        last_name: row.last_name,
        email: row.email,
        phone_number: row.phone_number,
        profile_image: row.profile_image,
        role,
    })
}
