use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A job posting as stored in `jobs`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub company: Option<String>,
    /// Free text; may contain "remote".
    pub location: Option<String>,
    pub posted_by: Option<String>,
    /// User id of the INDUSTRY user who posted the job.
    pub industry_id: Option<Uuid>,
    pub industry: Option<String>,
    pub skills: Vec<String>,
    pub employment_type: Option<String>,
    pub job_min_salary: Option<i32>,
    pub job_max_salary: Option<i32>,
    pub job_salary_currency: Option<String>,
    /// `None` or `0` means the posting states no requirement.
    pub years_of_experience: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub active: bool,
}

impl Job {
    /// Required years, if the posting states a positive requirement.
    pub fn required_years(&self) -> Option<u32> {
        self.years_of_experience
            .filter(|years| *years > 0)
            .map(|years| years as u32)
    }
}
