use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use crate::models::profile::{EducationEntry, ProfessionalExperience, Project, UserProfile};
use crate::store::StoreError;
use crate::students::completeness::{missing_profile_fields, profile_completeness};

/// What an industry viewer sees of a student profile.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentView {
    pub student_id: Uuid,
    pub full_name: Option<String>,
    pub gender: Option<String>,
    pub profile_picture_base64: Option<String>,
    pub skills: Vec<String>,
    pub experience: Option<String>,
    pub summary: Option<String>,
    pub current_location: Option<String>,
    pub preferred_locations: Vec<String>,
    pub work_preference: Option<String>,
    pub linked_in_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub github_url: Option<String>,
    pub availability: Option<String>,
    pub hobbies: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,

    pub email: String,
    pub phone_number: Option<String>,

    pub education_entries: Vec<EducationEntry>,
    /// Taken from the first Graduation / Post Graduation entry.
    pub degree: Option<String>,
    pub specialization: Option<String>,
    pub institution: Option<String>,
    pub graduation_year: Option<String>,

    pub professional_experiences: Vec<ProfessionalExperience>,
    pub projects: Vec<Project>,

    pub hackathons_participated: usize,
    pub jobs_applied: usize,

    pub resume_file_name: Option<String>,
    pub resume_file_type: Option<String>,
    pub resume_available: bool,
    pub resume_base64: Option<String>,

    pub profile_completeness_score: u8,
    pub missing_profile_fields: Vec<&'static str>,
    pub is_shortlisted: bool,
}

/// Per-viewer facts fetched before projecting. Count lookups keep their error so
/// projection can default them instead of failing.
#[derive(Debug)]
pub struct ProjectionContext {
    pub is_shortlisted: bool,
    pub hackathon_applications: Result<usize, StoreError>,
    pub job_applications: Result<usize, StoreError>,
}

/// Shapes a profile into a `StudentView`. Never fails: missing associations
/// project as empty or zero.
pub fn project(profile: UserProfile, ctx: ProjectionContext) -> StudentView {
    let profile_completeness_score = profile_completeness(&profile);
    let missing = missing_profile_fields(&profile);
    let resume_available = profile.has_resume();

    let hackathons_participated = count_or_zero(ctx.hackathon_applications, "hackathon", &profile);
    let jobs_applied = count_or_zero(ctx.job_applications, "job", &profile);

    let graduation = profile
        .education_entries
        .iter()
        .find(|e| e.is_degree_level())
        .cloned()
        .unwrap_or_default();

    let email = profile
        .email
        .clone()
        .unwrap_or_else(|| profile.applicant_email.clone());

    StudentView {
        student_id: profile.id,
        full_name: profile.full_name,
        gender: profile.gender,
        profile_picture_base64: profile.profile_picture_base64,
        skills: profile.skills,
        experience: profile.experience,
        summary: profile.summary,
        current_location: profile.current_location,
        preferred_locations: profile.preferred_locations,
        work_preference: profile.work_preference,
        linked_in_url: profile.linked_in_url,
        portfolio_url: profile.portfolio_url,
        github_url: profile.github_url,
        availability: profile.availability,
        hobbies: profile.hobbies,
        created_at: profile.created_at,
        last_updated: profile.last_updated,
        email,
        phone_number: profile.phone_number,
        education_entries: profile.education_entries,
        degree: graduation.degree,
        specialization: graduation.stream,
        institution: graduation.institution,
        graduation_year: graduation.passing_year,
        professional_experiences: profile.professional_experiences,
        projects: profile.projects,
        hackathons_participated,
        jobs_applied,
        resume_file_name: profile.resume_file_name,
        resume_file_type: profile.resume_file_type,
        resume_available,
        resume_base64: profile.resume_base64,
        profile_completeness_score,
        missing_profile_fields: missing,
        is_shortlisted: ctx.is_shortlisted,
    }
}

fn count_or_zero(lookup: Result<usize, StoreError>, kind: &str, profile: &UserProfile) -> usize {
    lookup.unwrap_or_else(|e| {
        warn!(
            "Could not count {kind} applications for {} ({}): {e}",
            profile.applicant_email, profile.id
        );
        0
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;

    fn ctx(hackathons: Result<usize, StoreError>, jobs: Result<usize, StoreError>) -> ProjectionContext {
        ProjectionContext {
            is_shortlisted: false,
            hackathon_applications: hackathons,
            job_applications: jobs,
        }
    }

    fn entry(level: &str, degree: &str, year: &str) -> EducationEntry {
        EducationEntry {
            level: Some(level.to_string()),
            degree: Some(degree.to_string()),
            institution: Some(format!("{degree} Institute")),
            passing_year: Some(year.to_string()),
            stream: Some("Engineering".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_graduation_fields_from_first_degree_entry() {
        let mut p = fixtures::profile("s@mail.io");
        p.education_entries = vec![
            entry("Class 12th", "HSC", "2018"),
            entry("graduation", "B.E.", "2022"),
            entry("Post Graduation", "M.Tech", "2024"),
        ];

        let view = project(p, ctx(Ok(0), Ok(0)));
        assert_eq!(view.degree.as_deref(), Some("B.E."));
        assert_eq!(view.graduation_year.as_deref(), Some("2022"));
        assert_eq!(view.institution.as_deref(), Some("B.E. Institute"));
        assert_eq!(view.specialization.as_deref(), Some("Engineering"));
        assert_eq!(view.education_entries.len(), 3);
    }

    #[test]
    fn test_no_degree_entry_leaves_graduation_fields_empty() {
        let mut p = fixtures::profile("s@mail.io");
        p.education_entries = vec![entry("Class 12th", "HSC", "2018")];
        let view = project(p, ctx(Ok(0), Ok(0)));
        assert!(view.degree.is_none());
        assert!(view.graduation_year.is_none());
    }

    #[test]
    fn test_lookup_failures_default_to_zero() {
        let p = fixtures::profile("s@mail.io");
        let view = project(
            p,
            ctx(
                Err(StoreError::Unavailable("down".to_string())),
                Ok(4),
            ),
        );
        assert_eq!(view.hackathons_participated, 0);
        assert_eq!(view.jobs_applied, 4);
    }

    #[test]
    fn test_email_falls_back_to_login_email() {
        let mut p = fixtures::profile("login@mail.io");
        assert_eq!(project(p.clone(), ctx(Ok(0), Ok(0))).email, "login@mail.io");

        p.email = Some("contact@mail.io".to_string());
        assert_eq!(project(p, ctx(Ok(0), Ok(0))).email, "contact@mail.io");
    }

    #[test]
    fn test_resume_flags() {
        let mut p = fixtures::profile("s@mail.io");
        p.resume_file_name = Some("cv.pdf".to_string());
        p.resume_base64 = Some(String::new());
        let view = project(p.clone(), ctx(Ok(0), Ok(0)));
        assert!(!view.resume_available);

        p.resume_base64 = Some("JVBERi0=".to_string());
        let view = project(p, ctx(Ok(0), Ok(0)));
        assert!(view.resume_available);
        assert_eq!(view.resume_base64.as_deref(), Some("JVBERi0="));
        assert_eq!(view.resume_file_name.as_deref(), Some("cv.pdf"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let mut p = fixtures::profile("s@mail.io");
        p.linked_in_url = Some("https://linkedin.com/in/s".to_string());
        let json = serde_json::to_value(project(
            p,
            ProjectionContext {
                is_shortlisted: true,
                hackathon_applications: Ok(2),
                job_applications: Ok(1),
            },
        ))
        .unwrap();
        assert_eq!(json["isShortlisted"], true);
        assert_eq!(json["hackathonsParticipated"], 2);
        assert_eq!(json["linkedInUrl"], "https://linkedin.com/in/s");
        assert_eq!(json["profileCompletenessScore"], 8);
    }
}
