use serde::{Deserialize, Serialize};

use crate::error::FieldError;
use crate::extract::{check_email, collect, Validate};

/// Request body for login and registration.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Validate for Credentials {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        check_email(&mut errors, self.email.trim());
        collect(errors)
    }
}

impl Credentials {
    pub fn normalized_email(&self) -> String {
        self.email.trim().to_lowercase()
    }
}

/// Response returned after login or register.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer",
        }
    }
}

/// Identity behind the presented token.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub email: String,
    pub user_id: Option<String>,
}
