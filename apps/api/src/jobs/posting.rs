use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::Job;
use crate::models::user::User;

/// Body of job create and update requests.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub industry: Option<String>,
    pub skills: Vec<String>,
    pub employment_type: Option<String>,
    pub job_min_salary: Option<i32>,
    pub job_max_salary: Option<i32>,
    pub job_salary_currency: Option<String>,
    pub years_of_experience: Option<i32>,
    /// Defaults to true on create and to the current value on update.
    pub active: Option<bool>,
}

impl JobRequest {
    /// Title and company are required.
    pub fn validate(&self) -> Result<(), AppError> {
        if blank(&self.title) {
            return Err(AppError::Validation("Job title is required".to_string()));
        }
        if blank(&self.company) {
            return Err(AppError::Validation("Company is required".to_string()));
        }
        if let (Some(min), Some(max)) = (self.job_min_salary, self.job_max_salary) {
            if min > max {
                return Err(AppError::Validation(format!(
                    "Minimum salary {min} exceeds maximum salary {max}"
                )));
            }
        }
        if self.years_of_experience.is_some_and(|years| years < 0) {
            return Err(AppError::Validation(
                "Years of experience cannot be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// A new active posting owned by `owner`.
    pub fn into_job(self, owner: &User) -> Job {
        let mut job = Job {
            id: Uuid::new_v4(),
            title: None,
            description: None,
            company: None,
            location: None,
            posted_by: Some(owner.name.clone().unwrap_or_else(|| owner.email.clone())),
            industry_id: Some(owner.id),
            industry: None,
            skills: Vec::new(),
            employment_type: None,
            job_min_salary: None,
            job_max_salary: None,
            job_salary_currency: None,
            years_of_experience: None,
            created_at: Utc::now(),
            active: true,
        };
        self.apply_to(&mut job);
        job
    }

    /// Replaces the editable fields. Ownership, id and creation time are kept.
    pub fn apply_to(self, job: &mut Job) {
        job.title = trimmed(self.title);
        job.description = self.description;
        job.company = trimmed(self.company);
        job.location = trimmed(self.location);
        job.industry = self.industry;
        job.skills = self
            .skills
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        job.employment_type = self.employment_type;
        job.job_min_salary = self.job_min_salary;
        job.job_max_salary = self.job_max_salary;
        job.job_salary_currency = self.job_salary_currency;
        job.years_of_experience = self.years_of_experience;
        if let Some(active) = self.active {
            job.active = active;
        }
    }
}

fn blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
