//! Business transfer objects

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A franchisor-owned business offering franchise opportunities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub investment_required: Option<Decimal>,
    pub founded: Option<String>,
    pub number_of_locations: Option<i32>,
    pub owner_id: i64,
}
