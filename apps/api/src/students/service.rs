//! Student directory: store orchestration around the pure filter and projection.
//!
//! Every read that touches a single student is recorded through the activity logger.

use std::collections::HashSet;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::activity::{ActivityAction, ActivityEvent};
use crate::models::profile::UserProfile;
use crate::models::shortlist::Shortlist;
use crate::models::user::User;
use crate::store::Stores;
use crate::students::filter::{apply_filters, FilterCriteria};
use crate::students::view::{project, ProjectionContext, StudentView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortlistOutcome {
    Created,
    AlreadyShortlisted,
}

impl ShortlistOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            ShortlistOutcome::Created => "Student shortlisted successfully",
            ShortlistOutcome::AlreadyShortlisted => "Student already shortlisted",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDownload {
    pub file_name: Option<String>,
    pub file_type: Option<String>,
    pub base64_data: String,
}

/// Applicant profiles matching `criteria`, projected for `viewer`.
pub async fn list_students(
    stores: &Stores,
    viewer: &User,
    criteria: &FilterCriteria,
) -> Result<Vec<StudentView>, AppError> {
    let profiles = stores.profiles.list_applicant_profiles().await?;
    let total = profiles.len();
    let filtered = apply_filters(profiles, criteria);

    let shortlisted: HashSet<String> = stores
        .shortlists
        .find_by_industry_email(&viewer.email)
        .await?
        .into_iter()
        .map(|s| s.student_email)
        .collect();

    let mut views = Vec::with_capacity(filtered.len());
    for profile in filtered {
        let is_shortlisted = shortlisted.contains(&profile.applicant_email);
        views.push(project_with_counts(stores, profile, is_shortlisted).await);
    }

    info!(
        "{} listed {} of {} students",
        viewer.email,
        views.len(),
        total
    );
    Ok(views)
}

/// One student by profile id. Records PROFILE_VIEWED.
pub async fn get_student(
    stores: &Stores,
    viewer: &User,
    student_id: Uuid,
) -> Result<StudentView, AppError> {
    let profile = find_student(stores, student_id).await?;
    let is_shortlisted = stores
        .shortlists
        .exists(&viewer.email, &profile.applicant_email)
        .await?;

    stores
        .activity
        .record(ActivityEvent::new(viewer, &profile, ActivityAction::ProfileViewed));

    Ok(project_with_counts(stores, profile, is_shortlisted).await)
}

/// Records CANDIDATE_SHORTLISTED only when a new shortlist entry is created.
/// The store's insert decides the outcome, so concurrent requests yield one `Created`.
pub async fn shortlist_student(
    stores: &Stores,
    viewer: &User,
    student_id: Uuid,
) -> Result<ShortlistOutcome, AppError> {
    let profile = find_student(stores, student_id).await?;

    let created = stores
        .shortlists
        .create(Shortlist::new(
            &viewer.email,
            viewer.id,
            &profile.applicant_email,
            profile.id,
        ))
        .await?;
    if !created {
        return Ok(ShortlistOutcome::AlreadyShortlisted);
    }

    stores.activity.record(ActivityEvent::new(
        viewer,
        &profile,
        ActivityAction::CandidateShortlisted,
    ));
    info!("{} shortlisted {}", viewer.email, profile.applicant_email);

    Ok(ShortlistOutcome::Created)
}

/// Removing a student who was never shortlisted is not an error.
pub async fn remove_shortlist(
    stores: &Stores,
    viewer: &User,
    student_id: Uuid,
) -> Result<(), AppError> {
    let profile = find_student(stores, student_id).await?;
    let removed = stores
        .shortlists
        .delete(&viewer.email, &profile.applicant_email)
        .await?;
    if removed {
        info!("{} removed {} from shortlist", viewer.email, profile.applicant_email);
    }
    Ok(())
}

/// Shortlisted students. Entries whose profile no longer exists are skipped.
pub async fn shortlisted_students(
    stores: &Stores,
    viewer: &User,
) -> Result<Vec<StudentView>, AppError> {
    let shortlists = stores.shortlists.find_by_industry_email(&viewer.email).await?;

    let mut views = Vec::with_capacity(shortlists.len());
    for shortlist in shortlists {
        match stores
            .profiles
            .find_by_applicant_email(&shortlist.student_email)
            .await?
        {
            Some(profile) => views.push(project_with_counts(stores, profile, true).await),
            None => info!(
                "Skipping shortlist entry for missing profile {}",
                shortlist.student_email
            ),
        }
    }
    Ok(views)
}

/// The student's resume. Records RESUME_DOWNLOADED.
pub async fn download_resume(
    stores: &Stores,
    viewer: &User,
    student_id: Uuid,
) -> Result<ResumeDownload, AppError> {
    let profile = find_student(stores, student_id).await?;

    let base64_data = profile
        .resume_base64
        .clone()
        .filter(|data| !data.is_empty())
        .ok_or_else(|| AppError::NotFound(format!("Student {student_id} has no resume")))?;

    stores.activity.record(ActivityEvent::new(
        viewer,
        &profile,
        ActivityAction::ResumeDownloaded,
    ));

    Ok(ResumeDownload {
        file_name: profile.resume_file_name,
        file_type: profile.resume_file_type,
        base64_data,
    })
}

async fn find_student(stores: &Stores, student_id: Uuid) -> Result<UserProfile, AppError> {
    stores
        .profiles
        .find_by_id(student_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Student {student_id} not found")))
}

/// Fetches the related counts and projects. Count failures are carried into the
/// projection, which logs them and reports zero.
async fn project_with_counts(stores: &Stores, profile: UserProfile, is_shortlisted: bool) -> StudentView {
    let hackathon_lookup = async {
        match profile.applicant_id {
            Some(applicant_id) => stores
                .hackathon_applications
                .find_by_applicant_id(applicant_id)
                .await
                .map(|apps| apps.len()),
            None => Ok(0),
        }
    };
    let job_lookup = async {
        stores
            .applications
            .find_by_applicant_email(&profile.applicant_email)
            .await
            .map(|apps| apps.len())
    };
    let (hackathon_applications, job_applications) = tokio::join!(hackathon_lookup, job_lookup);

    project(
        profile,
        ProjectionContext {
            is_shortlisted,
            hackathon_applications,
            job_applications,
        },
    )
}
