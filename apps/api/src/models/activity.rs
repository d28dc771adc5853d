use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::profile::UserProfile;
use crate::models::user::User;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityAction {
    ProfileViewed,
    ResumeDownloaded,
    CandidateShortlisted,
}

impl ActivityAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityAction::ProfileViewed => "PROFILE_VIEWED",
            ActivityAction::ResumeDownloaded => "RESUME_DOWNLOADED",
            ActivityAction::CandidateShortlisted => "CANDIDATE_SHORTLISTED",
        }
    }
}

/// Audit record of an industry user acting on a student's data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEvent {
    pub actor_email: String,
    pub actor_id: Uuid,
    pub subject_email: String,
    pub subject_id: Uuid,
    pub action: ActivityAction,
    pub timestamp: DateTime<Utc>,
}

impl ActivityEvent {
    pub fn new(actor: &User, subject: &UserProfile, action: ActivityAction) -> Self {
        Self {
            actor_email: actor.email.clone(),
            actor_id: actor.id,
            subject_email: subject.applicant_email.clone(),
            subject_id: subject.id,
            action,
            timestamp: Utc::now(),
        }
    }
}
