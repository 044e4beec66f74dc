//! Franchise application transfer objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status every application carries at creation time.
pub const INITIAL_APPLICATION_STATUS: &str = "Pending";

/// A franchisee's application for a franchise.
///
/// `status` and `submission_date` are server-assigned; the resume and
/// financial statement fields are opaque references, not processed content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDto {
    pub id: i64,
    pub status: String,
    pub submission_date: DateTime<Utc>,
    pub cover_letter: Option<String>,
    pub resume: Option<String>,
    pub financial_statement: Option<String>,
    pub applicant_id: i64,
    pub franchise_id: i64,
}
