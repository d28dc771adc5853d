use std::collections::HashMap;

use crate::models::profile::{EducationEntry, UserProfile};

/// Conjunctive filter over student profiles. `None` criteria always pass.
///
/// All text comparisons are case-insensitive substring matches, except
/// `graduation_year` which must equal an entry's passing year exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub degree: Option<String>,
    /// Matches the education stream or the degree.
    pub specialization: Option<String>,
    pub skills: Option<String>,
    pub graduation_year: Option<String>,
    pub college: Option<String>,
    /// Current, any preferred, or the legacy single preferred location; either direction.
    pub location: Option<String>,
    pub availability: Option<String>,
    /// Full name, any skill, or any institution.
    pub keyword: Option<String>,
}

impl FilterCriteria {
    /// Builds criteria from query parameters. Unknown keys and blank values are ignored.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let get = |key: &str| {
            params
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        FilterCriteria {
            degree: get("degree"),
            specialization: get("specialization"),
            skills: get("skills"),
            graduation_year: get("graduationYear"),
            college: get("college"),
            location: get("location"),
            availability: get("availability"),
            keyword: get("keyword"),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == FilterCriteria::default()
    }

    pub fn matches(&self, profile: &UserProfile) -> bool {
        let education = &profile.education_entries;

        if let Some(degree) = &self.degree {
            if !any_education(education, |e| contains_ci(e.degree.as_deref(), degree)) {
                return false;
            }
        }

        if let Some(spec) = &self.specialization {
            let hit = any_education(education, |e| {
                contains_ci(e.stream.as_deref(), spec) || contains_ci(e.degree.as_deref(), spec)
            });
            if !hit {
                return false;
            }
        }

        if let Some(skill) = &self.skills {
            if !profile.skills.iter().any(|s| contains_ci(Some(s.as_str()), skill)) {
                return false;
            }
        }

        if let Some(year) = &self.graduation_year {
            if !any_education(education, |e| e.passing_year.as_deref() == Some(year.as_str())) {
                return false;
            }
        }

        if let Some(college) = &self.college {
            if !any_education(education, |e| contains_ci(e.institution.as_deref(), college)) {
                return false;
            }
        }

        if let Some(location) = &self.location {
            let hit = profile
                .current_location
                .iter()
                .chain(profile.preferred_locations.iter())
                .chain(profile.preferred_location.iter())
                .any(|candidate| overlaps_ci(candidate, location));
            if !hit {
                return false;
            }
        }

        if let Some(availability) = &self.availability {
            if !contains_ci(profile.availability.as_deref(), availability) {
                return false;
            }
        }

        if let Some(keyword) = &self.keyword {
            let hit = contains_ci(profile.full_name.as_deref(), keyword)
                || profile.skills.iter().any(|s| contains_ci(Some(s.as_str()), keyword))
                || any_education(education, |e| contains_ci(e.institution.as_deref(), keyword));
            if !hit {
                return false;
            }
        }

        true
    }
}

/// Keeps the profiles matching every supplied criterion, in input order.
pub fn apply_filters(profiles: Vec<UserProfile>, criteria: &FilterCriteria) -> Vec<UserProfile> {
    if criteria.is_empty() {
        return profiles;
    }
    profiles.into_iter().filter(|p| criteria.matches(p)).collect()
}

fn any_education(entries: &[EducationEntry], pred: impl Fn(&EducationEntry) -> bool) -> bool {
    entries.iter().any(pred)
}

fn contains_ci(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(&needle.to_lowercase()))
}

/// Substring in either direction. Blank values never match.
fn overlaps_ci(a: &str, b: &str) -> bool {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    !a.is_empty() && !b.is_empty() && (a.contains(&b) || b.contains(&a))
}
