//! Franchise application service
//!
//! Applications are submitted by franchisee accounts against a franchise
//! offering. Status is a free-form string set to "Pending" on creation and
//! moved only through the dedicated status operation; an optional configured
//! allow-list can close the status vocabulary.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::ApplicationDto;
use shared::models::INITIAL_APPLICATION_STATUS;

/// Application service
#[derive(Clone)]
pub struct ApplicationService {
    db: PgPool,
}

#[derive(Debug, sqlx::FromRow)]
struct ApplicationRow {
    id: i64,
    status: String,
    submission_date: DateTime<Utc>,
    cover_letter: Option<String>,
    resume: Option<String>,
    financial_statement: Option<String>,
    applicant_id: i64,
    franchise_id: i64,
}

/// Input for submitting an application.
///
/// Status and submission date are server-assigned and not accepted here.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationInput {
    pub franchise_id: i64,
    pub applicant_id: i64,
    pub cover_letter: Option<String>,
    pub resume: Option<String>,
    pub financial_statement: Option<String>,
}

/// Input for revising an application's documents. Only the three document
/// fields are writable through this path.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApplicationInput {
    pub cover_letter: Option<String>,
    pub resume: Option<String>,
    pub financial_statement: Option<String>,
}

const APPLICATION_COLUMNS: &str = "id, status, submission_date, cover_letter, resume, \
     financial_statement, applicant_id, franchise_id";

impl ApplicationService {
    /// Create a new ApplicationService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List every application.
    pub async fn get_all(&self) -> AppResult<Vec<ApplicationDto>> {
        let rows = sqlx::query_as::<_, ApplicationRow>(&format!(
            "SELECT {} FROM applications ORDER BY id ASC",
            APPLICATION_COLUMNS
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(map_to_dto).collect())
    }

    /// Get an application by id.
    pub async fn get_by_id(&self, id: i64) -> AppResult<ApplicationDto> {
        let row = sqlx::query_as::<_, ApplicationRow>(&format!(
            "SELECT {} FROM applications WHERE id = $1",
            APPLICATION_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::not_found("Application", id))?;

        Ok(map_to_dto(row))
    }

    /// List an applicant's submissions. The applicant account must exist.
    pub async fn get_by_applicant(&self, applicant_id: i64) -> AppResult<Vec<ApplicationDto>> {
        let exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = $1")
            .bind(applicant_id)
            .fetch_one(&self.db)
            .await?;
        if exists == 0 {
            return Err(AppError::not_found("User", applicant_id));
        }

        let rows = sqlx::query_as::<_, ApplicationRow>(&format!(
            "SELECT {} FROM applications WHERE applicant_id = $1 ORDER BY id ASC",
            APPLICATION_COLUMNS
        ))
        .bind(applicant_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(map_to_dto).collect())
    }

    /// List the applications against an offering. The offering must exist.
    pub async fn get_by_franchise(&self, franchise_id: i64) -> AppResult<Vec<ApplicationDto>> {
        let exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM franchises WHERE id = $1")
            .bind(franchise_id)
            .fetch_one(&self.db)
            .await?;
        if exists == 0 {
            return Err(AppError::not_found("Franchise", franchise_id));
        }

        let rows = sqlx::query_as::<_, ApplicationRow>(&format!(
            "SELECT {} FROM applications WHERE franchise_id = $1 ORDER BY id ASC",
            APPLICATION_COLUMNS
        ))
        .bind(franchise_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(map_to_dto).collect())
    }

    /// Exact-match filter on status. An unknown status simply yields an
    /// empty list.
    pub async fn get_by_status(&self, status: &str) -> AppResult<Vec<ApplicationDto>> {
        let rows = sqlx::query_as::<_, ApplicationRow>(&format!(
            "SELECT {} FROM applications WHERE status = $1 ORDER BY id ASC",
            APPLICATION_COLUMNS
        ))
        .bind(status)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(map_to_dto).collect())
    }

    /// Submit an application. Status starts at "Pending" and the submission
    /// timestamp is taken server-side.
    pub async fn create(&self, input: CreateApplicationInput) -> AppResult<ApplicationDto> {
        let applicant_exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = $1")
            .bind(input.applicant_id)
            .fetch_one(&self.db)
            .await?;
        if applicant_exists == 0 {
            return Err(AppError::not_found("User", input.applicant_id));
        }

        let franchise_exists: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM franchises WHERE id = $1")
                .bind(input.franchise_id)
                .fetch_one(&self.db)
                .await?;
        if franchise_exists == 0 {
            return Err(AppError::not_found("Franchise", input.franchise_id));
        }

        let row = sqlx::query_as::<_, ApplicationRow>(&format!(
            r#"
            INSERT INTO applications (status, submission_date, cover_letter, resume,
                                      financial_statement, applicant_id, franchise_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            APPLICATION_COLUMNS
        ))
        .bind(INITIAL_APPLICATION_STATUS)
        .bind(Utc::now())
        .bind(&input.cover_letter)
        .bind(&input.resume)
        .bind(&input.financial_statement)
        .bind(input.applicant_id)
        .bind(input.franchise_id)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(
            application_id = row.id,
            franchise_id = row.franchise_id,
            "submitted application"
        );
        Ok(map_to_dto(row))
    }

    /// Move an application to a new status. Touches nothing but the status
    /// column. When an allow-list is configured, statuses outside it are
    /// rejected as a validation error.
    pub async fn update_status(
        &self,
        id: i64,
        status: &str,
        allowed: Option<&[String]>,
    ) -> AppResult<ApplicationDto> {
        if !Self::status_permitted(allowed, status) {
            return Err(AppError::validation(
                "status",
                "status is not in the configured allow-list",
            ));
        }

        let row = sqlx::query_as::<_, ApplicationRow>(&format!(
            "UPDATE applications SET status = $1 WHERE id = $2 RETURNING {}",
            APPLICATION_COLUMNS
        ))
        .bind(status)
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::not_found("Application", id))?;

        tracing::info!(application_id = id, status, "application status changed");
        Ok(map_to_dto(row))
    }

    /// Overwrite the applicant-supplied documents of an application. Status,
    /// submission date, and both links stay untouched.
    pub async fn update(&self, id: i64, input: UpdateApplicationInput) -> AppResult<ApplicationDto> {
        let row = sqlx::query_as::<_, ApplicationRow>(&format!(
            r#"
            UPDATE applications
            SET cover_letter = $1, resume = $2, financial_statement = $3
            WHERE id = $4
            RETURNING {}
            "#,
            APPLICATION_COLUMNS
        ))
        .bind(&input.cover_letter)
        .bind(&input.resume)
        .bind(&input.financial_statement)
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::not_found("Application", id))?;

        Ok(map_to_dto(row))
    }

    /// Withdraw an application.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM applications WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Application", id));
        }

        Ok(())
    }

    /// With no allow-list every status string is accepted; with one, only
    /// exact members pass.
    pub fn status_permitted(allowed: Option<&[String]>, status: &str) -> bool {
        match allowed {
            Some(list) => list.iter().any(|s| s == status),
            None => true,
        }
    }
}

fn map_to_dto(row: ApplicationRow) -> ApplicationDto {
    ApplicationDto {
        id: row.id,
        status: row.status,
        submission_date: row.submission_date,
        cover_letter: row.cover_letter,
        resume: row.resume,
        financial_statement: row.financial_statement,
        applicant_id: row.applicant_id,
        franchise_id: row.franchise_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_vocabulary_accepts_anything() {
        assert!(ApplicationService::status_permitted(None, "Pending"));
        assert!(ApplicationService::status_permitted(None, "Under Review"));
        assert!(ApplicationService::status_permitted(None, ""));
    }

    #[test]
    fn allow_list_is_exact_match() {
        let allowed = vec![
            "Pending".to_string(),
            "Approved".to_string(),
            "Rejected".to_string(),
        ];
        assert!(ApplicationService::status_permitted(Some(&allowed), "Approved"));
        assert!(!ApplicationService::status_permitted(Some(&allowed), "approved"));
        assert!(!ApplicationService::status_permitted(Some(&allowed), "Withdrawn"));
    }

    #[test]
    fn initial_status_is_pending() {
        assert_eq!(INITIAL_APPLICATION_STATUS, "Pending");
    }
}
