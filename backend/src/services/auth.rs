//! Authentication service
//!
//! Registration and login. Passwords are stored as bcrypt hashes and never
//! leave this module; both operations end by issuing a signed token.

use sqlx::PgPool;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::AuthResponse;
use crate::services::TokenService;
use shared::types::Role;

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    db: PgPool,
    tokens: TokenService,
}

/// Input for registering a new account.
#[derive(Debug)]
pub struct RegisterInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone_number: Option<String>,
    pub role: Role,
}

#[derive(sqlx::FromRow)]
struct CredentialRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
    password_hash: String,
    role: String,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(db: PgPool, config: &Config) -> Self {
        Self {
            db,
            tokens: TokenService::new(&config.jwt.secret, config.jwt.expiry_seconds),
        }
    }

    /// Register a new account and log it in.
    ///
    /// The email must be unique; a duplicate is reported before any insert.
    pub async fn register(&self, input: RegisterInput) -> AppResult<AuthResponse> {
        let exists: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
                .bind(&input.email)
                .fetch_one(&self.db)
                .await?;

        if exists > 0 {
            return Err(AppError::EmailInUse);
        }

        let password_hash = bcrypt::hash(&input.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("password hashing failed: {}", e)))?;

        let user = sqlx::query_as::<_, CredentialRow>(
            r#"
            INSERT INTO users (first_name, last_name, email, password_hash, phone_number, role)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, first_name, last_name, email, password_hash, role
            "#,
        )
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.email)
        .bind(&password_hash)
        .bind(&input.phone_number)
        .bind(input.role.as_str())
        .fetch_one(&self.db)
        .await?;

        tracing::info!(user_id = user.id, "registered new account");
        self.auth_response(user)
    }

    /// Verify credentials and issue a token.
    ///
    /// Unknown email and wrong password collapse to the same error.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthResponse> {
        let user = sqlx::query_as::<_, CredentialRow>(
            "SELECT id, first_name, last_name, email, password_hash, role FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

        let verified = bcrypt::verify(password, &user.password_hash)
            .map_err(|e| AppError::Internal(format!("password verification failed: {}", e)))?;

        if !verified {
            return Err(AppError::InvalidCredentials);
        }

        tracing::debug!(user_id = user.id, "login succeeded");
        self.auth_response(user)
    }

    fn auth_response(&self, user: CredentialRow) -> AppResult<AuthResponse> {
        let role = Role::parse(&user.role).ok_or_else(|| {
            AppError::Internal(format!("unknown role in users table: {}", user.role))
        })?;
        let token = self.tokens.issue(&user.email)?;

        Ok(AuthResponse {
            token,
            user_id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role,
        })
    }
}
