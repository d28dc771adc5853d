pub mod activity;
pub mod application;
pub mod job;
pub mod profile;
pub mod shortlist;
pub mod user;

/// Record builders shared by unit tests across modules.
#[cfg(test)]
pub mod fixtures {
    use chrono::Utc;
    use uuid::Uuid;

    use super::application::{HackathonApplication, JobApplication};
    use super::job::Job;
    use super::profile::UserProfile;
    use super::user::{SubscriptionTier, User, UserType};

    pub fn job(title: &str, company: &str, location: Option<&str>, skills: &[&str]) -> Job {
        Job {
            id: Uuid::new_v4(),
            title: Some(title.to_string()),
            description: None,
            company: Some(company.to_string()),
            location: location.map(str::to_string),
            posted_by: None,
            industry_id: None,
            industry: None,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            employment_type: None,
            job_min_salary: None,
            job_max_salary: None,
            job_salary_currency: None,
            years_of_experience: None,
            created_at: Utc::now(),
            active: true,
        }
    }

    pub fn profile(email: &str) -> UserProfile {
        UserProfile {
            id: Uuid::new_v4(),
            applicant_email: email.to_string(),
            applicant_id: Some(Uuid::new_v4()),
            ..Default::default()
        }
    }

    pub fn user(email: &str, user_type: UserType) -> User {
        User {
            id: Uuid::new_v4(),
            name: None,
            email: email.to_string(),
            picture_url: None,
            user_type,
            subscription_tier: SubscriptionTier::Free,
        }
    }

    pub fn application(job_id: Option<Uuid>, email: &str, title: &str, company: &str) -> JobApplication {
        JobApplication {
            id: Uuid::new_v4(),
            job_id,
            applicant_email: email.to_string(),
            applicant_id: None,
            job_title: Some(title.to_string()),
            company: Some(company.to_string()),
            location: None,
            status: "pending".to_string(),
            applied_at: Utc::now(),
            last_updated: Utc::now(),
        }
    }

    pub fn hackathon_application(applicant_id: Uuid) -> HackathonApplication {
        HackathonApplication {
            id: Uuid::new_v4(),
            hackathon_id: Uuid::new_v4(),
            applicant_id,
            as_team: false,
            team_name: None,
            team_size: 1,
            status: "ACTIVE".to_string(),
            applied_at: Utc::now(),
        }
    }
}
