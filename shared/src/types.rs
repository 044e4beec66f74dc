//! Common types used across the platform

use std::fmt;

use serde::{Deserialize, Serialize};

/// A user's role on the marketplace.
///
/// Roles are fixed at registration and drive every authorization decision.
/// The wire and storage representation keeps the `ROLE_` prefixed names so
/// existing clients and data stay compatible.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
    #[serde(rename = "ROLE_FRANCHISEE")]
    Franchisee,
    #[serde(rename = "ROLE_FRANCHISOR")]
    Franchisor,
}

impl Role {
    /// Storage/wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ROLE_ADMIN",
            Role::Franchisee => "ROLE_FRANCHISEE",
            Role::Franchisor => "ROLE_FRANCHISOR",
        }
    }

    /// Parse a stored role name. Returns `None` for anything outside the
    /// closed set.
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "ROLE_ADMIN" => Some(Role::Admin),
            "ROLE_FRANCHISEE" => Some(Role::Franchisee),
            "ROLE_FRANCHISOR" => Some(Role::Franchisor),
            _ => None,
        }
    }

    /// Role-set membership predicate used by every authorization check.
    pub fn is_any_of(self, allowed: &[Role]) -> bool {
        allowed.contains(&self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_storage_name() {
        for role in [Role::Admin, Role::Franchisee, Role::Franchisor] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn unknown_role_names_are_rejected() {
        assert_eq!(Role::parse("ROLE_OWNER"), None);
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn role_serializes_with_wire_prefix() {
        let json = serde_json::to_string(&Role::Franchisor).unwrap();
        assert_eq!(json, "\"ROLE_FRANCHISOR\"");

        let role: Role = serde_json::from_str("\"ROLE_FRANCHISEE\"").unwrap();
        assert_eq!(role, Role::Franchisee);
    }

    #[test]
    fn is_any_of_checks_membership() {
        assert!(Role::Admin.is_any_of(&[Role::Franchisor, Role::Admin]));
        assert!(!Role::Franchisee.is_any_of(&[Role::Franchisor, Role::Admin]));
        assert!(!Role::Admin.is_any_of(&[]));
    }
}
