use axum::{extract::State, Json};
use serde_json::Value;
use tracing::info;

use crate::auth::{require_applicant, CurrentUser};
use crate::errors::AppError;
use crate::models::profile::UserProfile;
use crate::profiles::merge::merge_profile;
use crate::state::AppState;

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<UserProfile>, AppError> {
    let profile = state
        .stores
        .profiles
        .find_by_applicant_email(&user.email)
        .await?
        .ok_or_else(|| {
            AppError::NotFound("Profile not found. Please create your profile first.".to_string())
        })?;
    Ok(Json(profile))
}

/// POST and PUT /api/v1/profile
///
/// Creates the profile on first save; later saves update only the fields sent.
pub async fn handle_save_profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(body): Json<Value>,
) -> Result<Json<UserProfile>, AppError> {
    require_applicant(&user)?;

    let existing = state.stores.profiles.find_by_applicant_email(&user.email).await?;
    let created = existing.is_none();
    let profile = merge_profile(existing, &user, body)?;
    state.stores.profiles.upsert(&profile).await?;

    info!(
        "{} profile {} for {}",
        if created { "Created" } else { "Updated" },
        profile.id,
        user.email
    );
    Ok(Json(profile))
}
