use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::jobs::posting::JobRequest;
use crate::jobs::service;
use crate::models::job::Job;
use crate::state::AppState;
use crate::students::handlers::MessageResponse;

/// GET /api/v1/jobs
///
/// Public listing, newest first.
pub async fn handle_list_jobs(State(state): State<AppState>) -> Result<Json<Vec<Job>>, AppError> {
    Ok(Json(state.stores.jobs.find_all().await?))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Job>, AppError> {
    Ok(Json(service::find_job(&state.stores, id).await?))
}

/// GET /api/v1/jobs/mine
pub async fn handle_posted_jobs(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<Job>>, AppError> {
    Ok(Json(service::posted_jobs(&state.stores, &user).await?))
}

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<JobRequest>,
) -> Result<Json<Job>, AppError> {
    Ok(Json(service::create_job(&state.stores, &user, req).await?))
}

/// PUT /api/v1/jobs/:id
pub async fn handle_update_job(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<JobRequest>,
) -> Result<Json<Job>, AppError> {
    Ok(Json(service::update_job(&state.stores, &user, id, req).await?))
}

/// DELETE /api/v1/jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    service::delete_job(&state.stores, &user, id).await?;
    Ok(Json(MessageResponse {
        message: "Job deleted successfully".to_string(),
    }))
}
