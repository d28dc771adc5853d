use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::auth::{require_industry, CurrentUser};
use crate::errors::AppError;
use crate::models::user::SubscriptionTier;
use crate::state::AppState;
use crate::students::filter::FilterCriteria;
use crate::students::service::{self, ResumeDownload};
use crate::students::subscription::{SubscriptionInfo, SubscriptionUpdateRequest};
use crate::students::view::StudentView;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentListResponse {
    pub students: Vec<StudentView>,
    pub subscription_type: SubscriptionTier,
    pub total_count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortlistedResponse {
    pub students: Vec<StudentView>,
    pub total_count: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDetailResponse {
    pub student: StudentView,
    pub subscription_type: SubscriptionTier,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /api/v1/students
pub async fn handle_list_students(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<StudentListResponse>, AppError> {
    require_industry(&user)?;

    let criteria = FilterCriteria::from_params(&params);
    let students = service::list_students(&state.stores, &user, &criteria).await?;

    Ok(Json(StudentListResponse {
        total_count: students.len(),
        students,
        subscription_type: user.subscription_tier,
    }))
}

/// GET /api/v1/students/shortlisted
pub async fn handle_shortlisted(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<ShortlistedResponse>, AppError> {
    require_industry(&user)?;

    let students = service::shortlisted_students(&state.stores, &user).await?;
    Ok(Json(ShortlistedResponse {
        total_count: students.len(),
        students,
    }))
}

/// GET /api/v1/students/:id
pub async fn handle_get_student(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<StudentDetailResponse>, AppError> {
    require_industry(&user)?;

    let student = service::get_student(&state.stores, &user, id).await?;
    Ok(Json(StudentDetailResponse {
        student,
        subscription_type: user.subscription_tier,
    }))
}

/// POST /api/v1/students/:id/shortlist
pub async fn handle_shortlist(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    require_industry(&user)?;

    let outcome = service::shortlist_student(&state.stores, &user, id).await?;
    Ok(Json(MessageResponse {
        message: outcome.message().to_string(),
    }))
}

/// DELETE /api/v1/students/:id/shortlist
pub async fn handle_remove_shortlist(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    require_industry(&user)?;

    service::remove_shortlist(&state.stores, &user, id).await?;
    Ok(Json(MessageResponse {
        message: "Student removed from shortlist".to_string(),
    }))
}

/// GET /api/v1/students/:id/resume/download
pub async fn handle_download_resume(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeDownload>, AppError> {
    require_industry(&user)?;

    let resume = service::download_resume(&state.stores, &user, id).await?;
    Ok(Json(resume))
}

/// GET /api/v1/students/subscription/info
pub async fn handle_subscription_info(
    CurrentUser(user): CurrentUser,
) -> Result<Json<SubscriptionInfo>, AppError> {
    require_industry(&user)?;
    Ok(Json(SubscriptionInfo::for_tier(user.subscription_tier)))
}

/// POST /api/v1/students/subscription/update
pub async fn handle_subscription_update(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<SubscriptionUpdateRequest>,
) -> Result<Json<SubscriptionInfo>, AppError> {
    require_industry(&user)?;

    let tier = SubscriptionTier::parse(req.subscription_type.trim()).ok_or_else(|| {
        AppError::Validation(format!(
            "Invalid subscription type '{}': expected FREE or PAID",
            req.subscription_type
        ))
    })?;

    state.stores.users.update_subscription(user.id, tier).await?;
    info!(
        "{} changed subscription {} -> {}",
        user.email,
        user.subscription_tier.as_str(),
        tier.as_str()
    );

    Ok(Json(SubscriptionInfo::for_tier(tier)))
}
