use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::applications::reconcile::{reconcile_job_applications, ReconciliationReport};
use crate::applications::service;
use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::jobs::service::owned_job;
use crate::models::application::JobApplication;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileQuery {
    #[serde(default)]
    pub dry_run: bool,
}

#[derive(Deserialize)]
pub struct StatusUpdateRequest {
    pub status: String,
}

/// POST /api/v1/jobs/:id/apply
pub async fn handle_apply(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(job_id): Path<Uuid>,
) -> Result<Json<JobApplication>, AppError> {
    Ok(Json(service::apply_to_job(&state.stores, &user, job_id).await?))
}

/// GET /api/v1/applications
///
/// The signed-in user's own applications.
pub async fn handle_my_applications(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<JobApplication>>, AppError> {
    Ok(Json(service::my_applications(&state.stores, &user).await?))
}

/// PUT /api/v1/applications/:id/status
pub async fn handle_update_status(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(application_id): Path<Uuid>,
    Json(req): Json<StatusUpdateRequest>,
) -> Result<Json<JobApplication>, AppError> {
    let application =
        service::update_status(&state.stores, &user, application_id, &req.status).await?;
    Ok(Json(application))
}

/// GET /api/v1/jobs/:id/applications
pub async fn handle_job_applications(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(job_id): Path<Uuid>,
) -> Result<Json<Vec<JobApplication>>, AppError> {
    let job = owned_job(&state.stores, &user, job_id).await?;
    let applications = state.stores.applications.find_by_job_id(job.id).await?;
    Ok(Json(applications))
}

/// POST /api/v1/jobs/:id/applications/reconcile?dryRun=true
pub async fn handle_reconcile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(job_id): Path<Uuid>,
    Query(params): Query<ReconcileQuery>,
) -> Result<Json<ReconciliationReport>, AppError> {
    let job = owned_job(&state.stores, &user, job_id).await?;
    let report = reconcile_job_applications(
        state.stores.jobs.as_ref(),
        state.stores.applications.as_ref(),
        &job,
        params.dry_run,
    )
    .await?;
    Ok(Json(report))
}
