use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An applicant's profile document. Stored whole as JSONB in `user_profiles.data`,
/// so every field tolerates being absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub id: Uuid,
    pub applicant_email: String,
    pub applicant_id: Option<Uuid>,
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    /// Contact email when it differs from the login email.
    pub email: Option<String>,
    pub gender: Option<String>,

    pub profile_picture_file_name: Option<String>,
    pub profile_picture_file_type: Option<String>,
    pub profile_picture_base64: Option<String>,
    pub profile_picture_file_size: Option<i64>,

    pub resume_file_name: Option<String>,
    pub resume_file_type: Option<String>,
    pub resume_base64: Option<String>,
    pub resume_file_size: Option<i64>,

    /// Free text such as "5+ years"; parsed leniently when matching.
    pub experience: Option<String>,
    pub professional_experiences: Vec<ProfessionalExperience>,
    pub skills: Vec<String>,
    pub summary: Option<String>,

    pub current_location: Option<String>,
    pub preferred_locations: Vec<String>,
    /// Single-location field from older profiles.
    pub preferred_location: Option<String>,
    /// Remote, On-site or Hybrid.
    pub work_preference: Option<String>,
    pub willing_to_relocate: Option<bool>,

    pub linked_in_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub github_url: Option<String>,
    pub website_url: Option<String>,

    pub availability: Option<String>,
    pub expected_salary: Option<String>,
    pub education_entries: Vec<EducationEntry>,
    pub hobbies: Vec<String>,
    pub projects: Vec<Project>,

    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

impl UserProfile {
    pub fn has_resume(&self) -> bool {
        self.resume_base64.as_deref().is_some_and(|r| !r.is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    /// "Class 12th", "Graduation", "Post Graduation", ...
    pub level: Option<String>,
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub board: Option<String>,
    pub passing_year: Option<String>,
    pub percentage: Option<String>,
    pub stream: Option<String>,
}

impl EducationEntry {
    pub fn is_degree_level(&self) -> bool {
        self.level.as_deref().is_some_and(|level| {
            level.eq_ignore_ascii_case("Graduation") || level.eq_ignore_ascii_case("Post Graduation")
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfessionalExperience {
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_current_job: Option<bool>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub name: Option<String>,
    pub description: Option<String>,
    pub github_link: Option<String>,
    pub website_link: Option<String>,
}
