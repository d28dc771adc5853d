use crate::models::profile::UserProfile;

type Check = fn(&UserProfile) -> bool;

/// The fixed completeness checklist. Each entry counts equally.
const PROFILE_CHECKLIST: &[(&str, Check)] = &[
    ("full_name", |p| filled(&p.full_name)),
    ("email", |p| filled(&p.email)),
    ("phone_number", |p| filled(&p.phone_number)),
    ("profile_picture", |p| filled(&p.profile_picture_base64)),
    ("resume", |p| filled(&p.resume_base64)),
    ("skills", |p| !p.skills.is_empty()),
    ("education", |p| !p.education_entries.is_empty()),
    ("professional_experience", |p| !p.professional_experiences.is_empty()),
    ("projects", |p| !p.projects.is_empty()),
    ("summary", |p| filled(&p.summary)),
    ("linked_in_url", |p| filled(&p.linked_in_url)),
    ("current_location", |p| filled(&p.current_location)),
];

fn filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

/// Percentage of checklist items present, truncated to an integer (0–100).
pub fn profile_completeness(profile: &UserProfile) -> u8 {
    let present = PROFILE_CHECKLIST
        .iter()
        .filter(|(_, check)| check(profile))
        .count();
    (present * 100 / PROFILE_CHECKLIST.len()) as u8
}

/// Checklist items the profile is missing, in checklist order.
pub fn missing_profile_fields(profile: &UserProfile) -> Vec<&'static str> {
    PROFILE_CHECKLIST
        .iter()
        .filter(|(_, check)| !check(profile))
        .map(|(name, _)| *name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;
    use crate::models::profile::{EducationEntry, ProfessionalExperience, Project};

    fn complete_profile() -> UserProfile {
        let mut p = fixtures::profile("full@mail.io");
        p.full_name = Some("Asha Rao".to_string());
        p.email = Some("asha.rao@mail.io".to_string());
        p.phone_number = Some("+91 90000 00000".to_string());
        p.profile_picture_base64 = Some("iVBORw0KGgo=".to_string());
        p.resume_base64 = Some("JVBERi0xLjQ=".to_string());
        p.skills = vec!["Rust".to_string()];
        p.education_entries = vec![EducationEntry::default()];
        p.professional_experiences = vec![ProfessionalExperience::default()];
        p.projects = vec![Project::default()];
        p.summary = Some("Backend engineer".to_string());
        p.linked_in_url = Some("https://linkedin.com/in/asha".to_string());
        p.current_location = Some("Pune".to_string());
        p
    }

    #[test]
    fn test_checklist_has_twelve_items() {
        assert_eq!(PROFILE_CHECKLIST.len(), 12);
    }

    #[test]
    fn test_complete_profile_is_100() {
        let p = complete_profile();
        assert_eq!(profile_completeness(&p), 100);
        assert!(missing_profile_fields(&p).is_empty());
    }

    #[test]
    fn test_empty_profile_is_0() {
        assert_eq!(profile_completeness(&fixtures::profile("empty@mail.io")), 0);
    }

    #[test]
    fn test_partial_profile_truncates() {
        let mut p = fixtures::profile("partial@mail.io");
        p.full_name = Some("Asha".to_string());
        // 1 of 12 → 8.33 → 8
        assert_eq!(profile_completeness(&p), 8);

        p.skills = vec!["Go".to_string()];
        p.summary = Some("hi".to_string());
        p.current_location = Some("Pune".to_string());
        p.linked_in_url = Some("https://linkedin.com/in/x".to_string());
        // 5 of 12 → 41.66 → 41
        assert_eq!(profile_completeness(&p), 41);
    }

    #[test]
    fn test_empty_strings_do_not_count() {
        let mut p = fixtures::profile("blank@mail.io");
        p.full_name = Some(String::new());
        p.email = Some(String::new());
        assert_eq!(profile_completeness(&p), 0);
        assert_eq!(missing_profile_fields(&p).len(), 12);
    }

    #[test]
    fn test_login_email_does_not_count_as_contact_email() {
        let mut p = complete_profile();
        p.email = None;
        // 11 of 12 → 91.66 → 91
        assert_eq!(profile_completeness(&p), 91);
        assert_eq!(missing_profile_fields(&p), vec!["email"]);
    }
}
