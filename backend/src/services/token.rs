//! Stateless token issuance and validation
//!
//! HS256 JWTs carrying only {sub, iat, exp}; the subject is the user's email
//! and everything else about the caller is re-resolved from the database on
//! each request. Validation fails closed, and every failure collapses to the
//! generic `InvalidToken` error so the caller never learns why verification
//! failed.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Token service holding the signing secret and expiry policy.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    expiry_seconds: i64,
}

impl TokenService {
    pub fn new(secret: &str, expiry_seconds: i64) -> Self {
        Self {
            secret: secret.to_string(),
            expiry_seconds,
        }
    }

    /// Issue a signed token for the given subject.
    pub fn issue(&self, subject: &str) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.expiry_seconds)).timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("token generation failed: {}", e)))
    }

    /// Extract the subject from a token, verifying signature and expiry.
    pub fn extract_subject(&self, token: &str) -> AppResult<String> {
        self.decode(token).map(|claims| claims.sub)
    }

    /// Check a token against an expected subject. Fails closed: bad
    /// signature, malformed token, expired token, and subject mismatch all
    /// return false.
    pub fn validate(&self, token: &str, expected_subject: &str) -> bool {
        match self.decode(token) {
            Ok(claims) => claims.sub == expected_subject,
            Err(_) => false,
        }
    }

    fn decode(&self, token: &str) -> AppResult<Claims> {
        // Expiry strictly before now is rejected; no leeway.
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|_| AppError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", 3600)
    }

    #[test]
    fn issued_token_round_trips_subject() {
        let tokens = service();
        let token = tokens.issue("applicant@example.com").unwrap();
        assert_eq!(
            tokens.extract_subject(&token).unwrap(),
            "applicant@example.com"
        );
        assert!(tokens.validate(&token, "applicant@example.com"));
    }

    #[test]
    fn subject_mismatch_fails_validation() {
        let tokens = service();
        let token = tokens.issue("applicant@example.com").unwrap();
        assert!(!tokens.validate(&token, "someone-else@example.com"));
    }

    #[test]
    fn expired_token_is_rejected() {
        // A service with negative expiry issues tokens already in the past.
        let expired = TokenService::new("test-secret", -3600);
        let token = expired.issue("applicant@example.com").unwrap();

        let tokens = service();
        assert!(tokens.extract_subject(&token).is_err());
        assert!(!tokens.validate(&token, "applicant@example.com"));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = service().issue("applicant@example.com").unwrap();
        let other = TokenService::new("other-secret", 3600);
        assert!(matches!(
            other.extract_subject(&token),
            Err(AppError::InvalidToken)
        ));
        assert!(!other.validate(&token, "applicant@example.com"));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let tokens = service();
        assert!(matches!(
            tokens.extract_subject("not-a-token"),
            Err(AppError::InvalidToken)
        ));
        assert!(!tokens.validate("", "applicant@example.com"));
    }
}
