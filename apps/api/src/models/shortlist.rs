use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An industry user's saved candidate, keyed by (industry_email, student_email).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Shortlist {
    pub id: Uuid,
    pub industry_email: String,
    pub industry_id: Uuid,
    pub student_email: String,
    pub student_id: Uuid,
    pub shortlisted_at: DateTime<Utc>,
    pub notes: Option<String>,
}

impl Shortlist {
    pub fn new(industry_email: &str, industry_id: Uuid, student_email: &str, student_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            industry_email: industry_email.to_string(),
            industry_id,
            student_email: student_email.to_string(),
            student_id,
            shortlisted_at: Utc::now(),
            notes: None,
        }
    }
}
