use axum::extract::FromRef;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::debug;

use crate::{config::JwtConfig, state::AppState};

/// Identity carried by an access token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenData {
    pub email: Option<String>,
    pub user_id: Option<String>,
}

/// JWT payload: identity plus timestamps.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    iat: i64, // issued at
    exp: i64, // expires at
}

/// HS256 signing and verification keys with the default token lifetime.
#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub ttl: TimeDuration,
}

impl JwtKeys {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            ttl: TimeDuration::minutes(config.ttl_minutes),
        }
    }

    /// Signs `data` with `exp = now + ttl`, falling back to the configured ttl.
    pub fn issue(&self, data: &TokenData, ttl: Option<TimeDuration>) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + ttl.unwrap_or(self.ttl);
        let claims = Claims {
            email: data.email.clone(),
            user_id: data.user_id.clone(),
            iat: now.unix_timestamp(),
            exp: exp.unix_timestamp(),
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(user_id = ?data.user_id, "jwt signed");
        Ok(token)
    }

    /// `None` for a bad signature, an expired token, or a missing `email` claim.
    pub fn decode(&self, token: &str) -> Option<TokenData> {
        let data = match decode::<Claims>(token, &self.decoding, &Validation::default()) {
            Ok(data) => data,
            Err(e) => {
                debug!(error = %e, "jwt rejected");
                return None;
            }
        };
        let email = data.claims.email?;
        Some(TokenData {
            email: Some(email),
            user_id: data.claims.user_id,
        })
    }
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        Self::new(&state.config.jwt)
    }
}
