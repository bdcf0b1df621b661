use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::instrument;

use super::dto::{CreateUserRequest, UserResponse};
use crate::{auth::services::create_account, error::AppError, extract::ValidJson, state::AppState};

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/api/users", post(create_user))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let email = payload.email.trim().to_lowercase();
    let id = create_account(
        state.store.as_ref(),
        &email,
        &payload.password,
        "Email already in use",
        "User creation failed",
    )
    .await?;
    Ok((StatusCode::CREATED, Json(UserResponse { id, email })))
}
