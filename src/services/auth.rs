//! Demo sign-in: no password, no session store, just a bearer-shaped token.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use serde::Serialize;
use validator::Validate;

use crate::forms::auth::SignInForm;
use crate::services::{ServiceError, ServiceResult};

/// Signed-in identity echoed back to the client.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AuthUser {
    pub email: String,
    pub name: String,
}

/// Successful sign-in payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AuthResponse {
    pub token: String,
    pub user: AuthUser,
}

/// Core business logic for the `/api/auth` endpoint.
///
/// Normalizes the email (trim + lowercase), validates it, and mints an
/// opaque demo token from the email and the current time.
pub fn sign_in(form: &SignInForm) -> ServiceResult<AuthResponse> {
    let normalized = SignInForm {
        email: form.email.trim().to_lowercase(),
    };
    if normalized.validate().is_err() {
        return Err(ServiceError::Validation("A valid email is required".into()));
    }
    let email = normalized.email;

    let token = STANDARD.encode(format!("{email}:{}", Utc::now().timestamp_millis()));
    let name = email.split('@').next().unwrap_or_default().to_string();

    Ok(AuthResponse {
        token,
        user: AuthUser { email, name },
    })
}
