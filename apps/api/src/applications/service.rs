//! Applying to jobs and moving applications through the hiring stages.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::auth::{require_applicant, require_industry};
use crate::errors::AppError;
use crate::jobs::service::find_job;
use crate::models::application::{ApplicationStatus, JobApplication};
use crate::models::user::User;
use crate::store::Stores;

/// Creates a pending application. A second application to the same job is rejected.
pub async fn apply_to_job(
    stores: &Stores,
    applicant: &User,
    job_id: Uuid,
) -> Result<JobApplication, AppError> {
    require_applicant(applicant)?;
    let job = find_job(stores, job_id).await?;

    let application = JobApplication::for_job(&job, applicant);
    if !stores.applications.create(&application).await? {
        return Err(AppError::Validation(
            "You have already applied to this job".to_string(),
        ));
    }

    info!("{} applied to job {} ({:?})", applicant.email, job.id, job.title);
    Ok(application)
}

pub async fn my_applications(stores: &Stores, user: &User) -> Result<Vec<JobApplication>, AppError> {
    Ok(stores.applications.find_by_applicant_email(&user.email).await?)
}

/// Only the industry user who posted the application's job may change its status.
pub async fn update_status(
    stores: &Stores,
    user: &User,
    application_id: Uuid,
    raw_status: &str,
) -> Result<JobApplication, AppError> {
    require_industry(user)?;

    let mut application = stores
        .applications
        .find_by_id(application_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Application {application_id} not found")))?;

    let job = match application.job_id {
        Some(job_id) => stores.jobs.find_by_id(job_id).await?,
        None => None,
    }
    .ok_or_else(|| AppError::NotFound("Job not found for this application".to_string()))?;

    if job.industry_id != Some(user.id) {
        return Err(AppError::Forbidden(
            "You can only update applications to your own jobs".to_string(),
        ));
    }

    let status = ApplicationStatus::parse(raw_status).ok_or_else(|| {
        let valid: Vec<&str> = ApplicationStatus::ALL.iter().map(|s| s.as_str()).collect();
        AppError::Validation(format!(
            "Invalid status '{raw_status}'. Must be one of: {}",
            valid.join(", ")
        ))
    })?;

    stores.applications.update_status(application.id, status).await?;
    info!(
        "{} moved application {} from {} to {}",
        user.email,
        application.id,
        application.status,
        status.as_str()
    );

    application.status = status.as_str().to_string();
    application.last_updated = Utc::now();
    Ok(application)
}
