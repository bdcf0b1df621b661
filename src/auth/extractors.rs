use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;

use super::jwt::{JwtKeys, TokenData};
use crate::error::AppError;

/// Identity decoded from an `Authorization: Bearer` header.
pub struct AuthUser {
    pub email: String,
    pub user_id: Option<String>,
}

/// Token part of a `Bearer <token>` header; the scheme is case-insensitive.
fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let keys = JwtKeys::from_ref(state);
        let token = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(bearer_token)
            .ok_or_else(|| AppError::Auth("Not authenticated".into()))?;

        match keys.decode(token) {
            Some(TokenData {
                email: Some(email),
                user_id,
            }) => Ok(AuthUser { email, user_id }),
            _ => {
                warn!("invalid or expired token");
                Err(AppError::Auth("Could not validate credentials".into()))
            }
        }
    }
}
