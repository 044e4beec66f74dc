//! Franchise opportunity transfer objects

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A franchise opportunity published under a business.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FranchiseDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub industry: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub logo: Option<String>,
    pub initial_investment: Option<Decimal>,
    pub ongoing_fees: Option<Decimal>,
    pub contract_length: Option<i32>,
    pub requirements: Option<String>,
    pub support_provided: Option<String>,
    pub training_program: Option<String>,
    pub business_id: i64,
}
