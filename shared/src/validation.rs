//! Input validation helpers for marketplace entities
//!
//! Request-body shape validation lives on the backend DTOs (via `validator`);
//! the domain-level checks that both create and update paths share live here.

use rust_decimal::Decimal;

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    Ok(())
}

/// Investment amounts (required investment, initial investment, ongoing fees)
/// must be non-negative.
pub fn validate_investment(amount: Decimal) -> Result<(), &'static str> {
    if amount < Decimal::ZERO {
        return Err("Investment amount cannot be negative");
    }
    Ok(())
}

/// Contract length is expressed in whole months and must be positive.
pub fn validate_contract_length(months: i32) -> Result<(), &'static str> {
    if months <= 0 {
        return Err("Contract length must be a positive number of months");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_valid() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("owner.name@franchise.co.uk").is_ok());
    }

    #[test]
    fn test_validate_email_invalid() {
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("no@domain").is_err());
        assert!(validate_email("@.").is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("password123").is_ok());
        assert!(validate_password("12345678").is_ok());
        assert!(validate_password("short").is_err());
    }

    #[test]
    fn test_validate_investment() {
        assert!(validate_investment(Decimal::ZERO).is_ok());
        assert!(validate_investment(Decimal::from(150_000)).is_ok());
        assert!(validate_investment(Decimal::from(-1)).is_err());
    }

    #[test]
    fn test_validate_contract_length() {
        assert!(validate_contract_length(12).is_ok());
        assert!(validate_contract_length(1).is_ok());
        assert!(validate_contract_length(0).is_err());
        assert!(validate_contract_length(-24).is_err());
    }
}
