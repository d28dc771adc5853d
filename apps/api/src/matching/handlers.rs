//! Axum route handlers for job recommendations.

use axum::{extract::State, Json};
use tracing::info;

use crate::auth::{require_applicant, CurrentUser};
use crate::errors::AppError;
use crate::matching::matcher::{recommend_jobs, CandidatePreferences, JobMatch};
use crate::state::AppState;

/// GET /api/v1/jobs/recommended
///
/// Ranks every job against the caller's profile. Jobs scoring 0 are omitted.
pub async fn handle_recommended_jobs(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<JobMatch>>, AppError> {
    require_applicant(&user)?;

    let profile = state
        .stores
        .profiles
        .find_by_applicant_email(&user.email)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No profile for {}", user.email)))?;

    let jobs = state.stores.jobs.find_all().await?;
    let total_jobs = jobs.len();

    let candidate = CandidatePreferences::from_profile(&profile);
    let matches = recommend_jobs(&candidate, jobs, &state.match_weights);

    info!(
        "Recommended {} of {} jobs for {}",
        matches.len(),
        total_jobs,
        user.email
    );
    Ok(Json(matches))
}
