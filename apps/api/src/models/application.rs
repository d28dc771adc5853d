use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::job::Job;
use crate::models::user::User;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: Uuid,
    /// May be missing or point at nothing for applications created before
    /// job ids were stable; see `applications::reconcile`.
    pub job_id: Option<Uuid>,
    pub applicant_email: String,
    pub applicant_id: Option<Uuid>,
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    /// One of [`ApplicationStatus`], stored lower-case.
    pub status: String,
    pub applied_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct HackathonApplication {
    pub id: Uuid,
    pub hackathon_id: Uuid,
    pub applicant_id: Uuid,
    pub as_team: bool,
    pub team_name: Option<String>,
    pub team_size: i32,
    /// ACTIVE, REJECTED, COMPLETED
    pub status: String,
    pub applied_at: DateTime<Utc>,
}

/// Hiring stages an industry user can move an application through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    ResumeViewed,
    CallScheduled,
    InterviewScheduled,
    OfferSent,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 7] = [
        ApplicationStatus::Pending,
        ApplicationStatus::ResumeViewed,
        ApplicationStatus::CallScheduled,
        ApplicationStatus::InterviewScheduled,
        ApplicationStatus::OfferSent,
        ApplicationStatus::Accepted,
        ApplicationStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::ResumeViewed => "resume_viewed",
            ApplicationStatus::CallScheduled => "call_scheduled",
            ApplicationStatus::InterviewScheduled => "interview_scheduled",
            ApplicationStatus::OfferSent => "offer_sent",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    /// Case-insensitive; surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(raw))
    }
}

impl JobApplication {
    /// A fresh pending application by `applicant` for `job`.
    pub fn for_job(job: &Job, applicant: &User) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            job_id: Some(job.id),
            applicant_email: applicant.email.clone(),
            applicant_id: Some(applicant.id),
            job_title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            status: ApplicationStatus::Pending.as_str().to_string(),
            applied_at: now,
            last_updated: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!(ApplicationStatus::parse("Offer_Sent"), Some(ApplicationStatus::OfferSent));
        assert_eq!(ApplicationStatus::parse(" rejected "), Some(ApplicationStatus::Rejected));
        assert_eq!(ApplicationStatus::parse("hired"), None);
        assert_eq!(ApplicationStatus::parse(""), None);
    }

    #[test]
    fn test_status_round_trips_through_as_str() {
        for status in ApplicationStatus::ALL {
            assert_eq!(ApplicationStatus::parse(status.as_str()), Some(status));
        }
    }
}
