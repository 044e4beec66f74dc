//! User account transfer objects

use serde::{Deserialize, Serialize};

use crate::types::Role;

/// A user account, as exposed through the API.
///
/// The password hash never leaves the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub profile_image: Option<String>,
    pub role: Role,
}

/// Payload returned by both registration and login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user_id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}
