//! Repairs job applications whose `job_id` is missing or names a job that no
//! longer exists.
//!
//! An unlinked application is attributed to a job when its title and company
//! equal the job's, ignoring case. Applications linked to a live job are never
//! moved, and an applicant ends up with at most one application per job.

use std::collections::HashSet;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::models::application::JobApplication;
use crate::models::job::Job;
use crate::store::{ApplicationStore, JobStore, StoreResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRepair {
    pub application_id: Uuid,
    pub previous_job_id: Option<Uuid>,
    pub job_id: Uuid,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconciliationReport {
    pub job_id: Uuid,
    pub dry_run: bool,
    pub repairs: Vec<ApplicationRepair>,
    pub applied: usize,
}

/// Pure planning step over every known application.
///
/// `live_job_ids` holds the ids of the jobs that currently exist; an application
/// pointing at one of them is correctly linked and left alone.
pub fn plan_repairs(
    job: &Job,
    applications: &[JobApplication],
    live_job_ids: &HashSet<Uuid>,
) -> Vec<ApplicationRepair> {
    let (Some(title), Some(company)) = (job.title.as_deref(), job.company.as_deref()) else {
        return Vec::new();
    };

    let mut linked_applicants: HashSet<&str> = applications
        .iter()
        .filter(|a| a.job_id == Some(job.id))
        .map(|a| a.applicant_email.as_str())
        .collect();

    let mut repairs = Vec::new();
    for application in applications {
        let dangling = match application.job_id {
            None => true,
            Some(id) => id != job.id && !live_job_ids.contains(&id),
        };
        if !dangling
            || !eq_ci(application.job_title.as_deref(), title)
            || !eq_ci(application.company.as_deref(), company)
        {
            continue;
        }
        // first one wins per applicant
        if !linked_applicants.insert(application.applicant_email.as_str()) {
            continue;
        }
        repairs.push(ApplicationRepair {
            application_id: application.id,
            previous_job_id: application.job_id,
            job_id: job.id,
        });
    }
    repairs
}

/// Plans and, unless `dry_run`, applies the repairs for one job.
pub async fn reconcile_job_applications(
    jobs: &dyn JobStore,
    applications: &dyn ApplicationStore,
    job: &Job,
    dry_run: bool,
) -> StoreResult<ReconciliationReport> {
    let mut live_job_ids: HashSet<Uuid> = jobs.find_all().await?.into_iter().map(|j| j.id).collect();
    live_job_ids.insert(job.id);

    let all_applications = applications.find_all().await?;
    let repairs = plan_repairs(job, &all_applications, &live_job_ids);

    let mut applied = 0;
    for repair in &repairs {
        info!(
            "{} application {}: job {:?} -> {}",
            if dry_run { "Would relink" } else { "Relinking" },
            repair.application_id,
            repair.previous_job_id,
            repair.job_id
        );
        if !dry_run {
            applications
                .reassign_job(repair.application_id, repair.job_id)
                .await?;
            applied += 1;
        }
    }

    Ok(ReconciliationReport {
        job_id: job.id,
        dry_run,
        repairs,
        applied,
    })
}

fn eq_ci(value: Option<&str>, expected: &str) -> bool {
    value.is_some_and(|v| v.trim().to_lowercase() == expected.trim().to_lowercase())
}
