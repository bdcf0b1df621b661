use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::extract::{check_email, collect, min_chars, Validate};

pub const MIN_PASSWORD_CHARS: usize = 8;

/// Request body for account creation.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
}

impl Validate for CreateUserRequest {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        check_email(&mut errors, self.email.trim());
        min_chars(&mut errors, "password", &self.password, MIN_PASSWORD_CHARS);
        collect(errors)
    }
}

/// Public part of the user returned to the client.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
}
