//! Authentication middleware
//!
//! Validates the bearer token on protected routes, resolves the caller to a
//! live user record, and attaches an explicit `AuthUser` to the request. The
//! caller identity is always passed as a value; there is no ambient security
//! context.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::services::TokenService;
use crate::AppState;
use shared::types::Role;

/// Authenticated caller, resolved from the bearer token.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub role: Role,
}

impl AuthUser {
    /// Role-based authorization gate. `Forbidden` when the caller's role is
    /// not in the operation's allowed set.
    pub fn require_any(&self, allowed: &[Role]) -> Result<(), AppError> {
        if self.role.is_any_of(allowed) {
            Ok(())
        } else {
            Err(AppError::Forbidden)
        }
    }
}

#[derive(sqlx::FromRow)]
struct AuthUserRow {
    id: i64,
    email: String,
    role: String,
}

/// Authentication middleware that validates bearer tokens.
///
/// Every route behind this layer requires a valid token; requests without one
/// are rejected before reaching a handler.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    match authenticate(&state, request.headers()).await {
        Ok(auth_user) => {
            request.extensions_mut().insert(auth_user);
            next.run(request).await
        }
        Err(err) => err.into_response(),
    }
}

async fn authenticate(
    state: &AppState,
    headers: &axum::http::HeaderMap,
) -> Result<AuthUser, AppError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthenticated)?;

    let token = parse_bearer(header).ok_or(AppError::Unauthenticated)?;

    let tokens = TokenService::new(&state.config.jwt.secret, state.config.jwt.expiry_seconds);
    let subject = tokens.extract_subject(token)?;

    let user = sqlx::query_as::<_, AuthUserRow>("SELECT id, email, role FROM users WHERE email = $1")
        .bind(&subject)
        .fetch_optional(&state.db)
        .await?
        .ok_or(AppError::InvalidToken)?;

    // Re-check the token against the resolved account.
    if !tokens.validate(token, &user.email) {
        return Err(AppError::InvalidToken);
    }

    let role = Role::parse(&user.role)
        .ok_or_else(|| AppError::Internal(format!("unknown role in users table: {}", user.role)))?;

    Ok(AuthUser {
        id: user.id,
        email: user.email,
        role,
    })
}

/// Extract the token from an `Authorization: Bearer <token>` header value.
fn parse_bearer(header: &str) -> Option<&str> {
    header.strip_prefix("Bearer ").filter(|t| !t.is_empty())
}

/// Extractor for the authenticated caller.
/// Use this in handlers to get the current user.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub AuthUser);

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .map(CurrentUser)
            .ok_or(AppError::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bearer_accepts_well_formed_header() {
        assert_eq!(parse_bearer("Bearer abc.def.ghi"), Some("abc.def.ghi"));
    }

    #[test]
    fn parse_bearer_rejects_other_schemes() {
        assert_eq!(parse_bearer("Basic dXNlcjpwYXNz"), None);
        assert_eq!(parse_bearer("bearer abc"), None);
        assert_eq!(parse_bearer("Bearer "), None);
        assert_eq!(parse_bearer(""), None);
    }

    #[test]
    fn require_any_maps_to_forbidden() {
        let user = AuthUser {
            id: 1,
            email: "owner@example.com".to_string(),
            role: Role::Franchisee,
        };
        assert!(user.require_any(&[Role::Franchisee]).is_ok());
        assert!(matches!(
            user.require_any(&[Role::Franchisor, Role::Admin]),
            Err(AppError::Forbidden)
        ));
    }
}
