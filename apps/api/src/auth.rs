//! Authenticated-identity resolution.
//!
//! Google OAuth login happens in front of this service. The proxy forwards the
//! session's email in `Config::auth_email_header`; we map it to a domain `User`.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::errors::AppError;
use crate::models::user::{User, UserType};
use crate::state::AppState;

/// The signed-in user. Rejects with 401 when the header is missing or unknown.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let email = parts
            .headers
            .get(state.config.auth_email_header.as_str())
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .ok_or(AppError::Unauthorized)?;

        let user = state
            .stores
            .users
            .find_by_email(email)
            .await?
            .ok_or(AppError::Unauthorized)?;

        Ok(CurrentUser(user))
    }
}

pub fn require_industry(user: &User) -> Result<(), AppError> {
    require_role(user, UserType::Industry)
}

pub fn require_applicant(user: &User) -> Result<(), AppError> {
    require_role(user, UserType::Applicant)
}

fn require_role(user: &User, expected: UserType) -> Result<(), AppError> {
    if user.user_type == expected {
        Ok(())
    } else {
        Err(AppError::Forbidden(format!(
            "Only {} users can perform this action",
            expected.as_str()
        )))
    }
}
