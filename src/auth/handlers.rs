use axum::{
    extract::{FromRef, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{Credentials, MeResponse, TokenResponse},
        extractors::AuthUser,
        jwt::{JwtKeys, TokenData},
        password::verify_password,
        services::create_account,
    },
    error::AppError,
    extract::ValidJson,
    state::AppState,
};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .route("/api/auth/me", get(me))
}

fn issue_token(
    state: &AppState,
    email: String,
    user_id: String,
    failure_context: &'static str,
) -> Result<Json<TokenResponse>, AppError> {
    let keys = JwtKeys::from_ref(state);
    let data = TokenData {
        email: Some(email),
        user_id: Some(user_id),
    };
    let token = keys
        .issue(&data, None)
        .map_err(AppError::infra(failure_context))?;
    Ok(Json(TokenResponse::bearer(token)))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<Credentials>,
) -> Result<Json<TokenResponse>, AppError> {
    let email = payload.normalized_email();
    let user = state
        .store
        .find_user_by_email(&email)
        .await
        .map_err(AppError::infra("Login failed"))?;

    // Same answer for an unknown email and a wrong password.
    let Some(user) = user else {
        warn!(%email, "login for unknown email");
        return Err(AppError::Auth(INVALID_CREDENTIALS.into()));
    };
    if !verify_password(&payload.password, &user.hashed_password) {
        warn!(%email, "login with wrong password");
        return Err(AppError::Auth(INVALID_CREDENTIALS.into()));
    }

    info!(user_id = %user.id, "login succeeded");
    issue_token(&state, email, user.id, "Login failed")
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<Credentials>,
) -> Result<Json<TokenResponse>, AppError> {
    let email = payload.normalized_email();
    let id = create_account(
        state.store.as_ref(),
        &email,
        &payload.password,
        "Email already registered",
        "Registration failed",
    )
    .await?;
    issue_token(&state, email, id, "Registration failed")
}

#[instrument(skip_all)]
pub async fn me(user: AuthUser) -> Json<MeResponse> {
    Json(MeResponse {
        email: user.email,
        user_id: user.user_id,
    })
}
