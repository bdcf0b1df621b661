use crate::auth::password::hash_password;
use crate::auth::repo_types::NewUser;
use crate::error::AppError;
use crate::store::Store;
use tracing::{info, warn};

/// Existence check then insert; returns the new user's id.
///
/// The two calls are not atomic, so concurrent sign-ups with the same email
/// can both succeed.
pub(crate) async fn create_account(
    store: &dyn Store,
    email: &str,
    password: &str,
    duplicate_message: &str,
    failure_context: &'static str,
) -> Result<String, AppError> {
    let existing = store
        .find_user_by_email(email)
        .await
        .map_err(AppError::infra(failure_context))?;
    if existing.is_some() {
        warn!(%email, "email already registered");
        return Err(AppError::Conflict(duplicate_message.into()));
    }

    let hashed_password = hash_password(password).map_err(AppError::infra(failure_context))?;
    let id = store
        .insert_user(NewUser {
            email: email.to_string(),
            hashed_password,
        })
        .await
        .map_err(AppError::infra(failure_context))?;
    info!(user_id = %id, "user created");
    Ok(id)
}
