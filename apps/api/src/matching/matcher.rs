//! Job matcher: ranks job postings by fit against one candidate.
//!
//! Pure and synchronous. Callers fetch the jobs and the profile first.
//!
//! Algorithm (each dimension 0–100, combined with [`MatchWeights`]):
//! 1. skills: share of the job's skills that substring-match any candidate skill
//!    (case-insensitive, either direction). No candidate skills → 0, job lists none → 50.
//! 2. location: any preferred location substring-matches the job location → 100,
//!    else remote job → 75, else 0. Candidate without locations → 50.
//! 3. experience: no requirement → 50, unknown candidate years → 30,
//!    enough years → 100, else 100 − 15 per missing year (floor 0).

use serde::Serialize;

use crate::matching::experience::parse_years_of_experience;
use crate::matching::weights::MatchWeights;
use crate::models::job::Job;
use crate::models::profile::UserProfile;

const NO_JOB_SKILLS_SCORE: f64 = 50.0;
const NO_LOCATION_PREFERENCE_SCORE: f64 = 50.0;
const REMOTE_SCORE: f64 = 75.0;
const NO_REQUIREMENT_SCORE: f64 = 50.0;
const UNKNOWN_EXPERIENCE_SCORE: f64 = 30.0;
const PENALTY_PER_MISSING_YEAR: f64 = 15.0;

/// Match inputs derived from a profile. Skills and locations are lower-cased and
/// blank entries dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidatePreferences {
    pub skills: Vec<String>,
    pub locations: Vec<String>,
    pub years_experience: Option<u32>,
}

impl CandidatePreferences {
    /// Locations are the preferred list plus the legacy single preference;
    /// the current location stands in only when both are empty.
    pub fn from_profile(profile: &UserProfile) -> Self {
        let skills = normalize_all(profile.skills.iter().map(String::as_str));

        let mut locations = normalize_all(
            profile
                .preferred_locations
                .iter()
                .map(String::as_str)
                .chain(profile.preferred_location.as_deref()),
        );
        if locations.is_empty() {
            locations = normalize_all(profile.current_location.as_deref());
        }

        let years_experience = profile
            .experience
            .as_deref()
            .and_then(parse_years_of_experience);

        Self {
            skills,
            locations,
            years_experience,
        }
    }
}

fn normalize_all<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .collect()
}

/// A job paired with its match percentage.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobMatch {
    pub job: Job,
    pub match_percentage: f64,
}

pub fn skill_score(job: &Job, candidate_skills: &[String]) -> f64 {
    if candidate_skills.is_empty() {
        return 0.0;
    }

    let job_skills = normalize_all(job.skills.iter().map(String::as_str));
    if job_skills.is_empty() {
        return NO_JOB_SKILLS_SCORE;
    }

    let matched = job_skills
        .iter()
        .filter(|required| {
            candidate_skills
                .iter()
                .any(|have| required.contains(have.as_str()) || have.contains(required.as_str()))
        })
        .count();

    matched as f64 / job_skills.len() as f64 * 100.0
}

/// A job without a location reads as an empty string, which every preference
/// contains, so it scores as a match.
pub fn location_score(job: &Job, candidate_locations: &[String]) -> f64 {
    if candidate_locations.is_empty() {
        return NO_LOCATION_PREFERENCE_SCORE;
    }

    let job_location = job
        .location
        .as_deref()
        .map(|l| l.trim().to_lowercase())
        .unwrap_or_default();

    let is_match = candidate_locations.iter().any(|preferred| {
        job_location.contains(preferred.as_str()) || preferred.contains(job_location.as_str())
    });

    if is_match {
        100.0
    } else if job_location.contains("remote") {
        REMOTE_SCORE
    } else {
        0.0
    }
}

pub fn experience_score(job: &Job, candidate_years: Option<u32>) -> f64 {
    let Some(required) = job.required_years() else {
        return NO_REQUIREMENT_SCORE;
    };
    let Some(have) = candidate_years else {
        return UNKNOWN_EXPERIENCE_SCORE;
    };
    if have >= required {
        return 100.0;
    }
    let gap = f64::from(required - have);
    (100.0 - gap * PENALTY_PER_MISSING_YEAR).max(0.0)
}

/// Overall 0–100 score of one job for one candidate.
pub fn job_match_score(job: &Job, candidate: &CandidatePreferences, weights: &MatchWeights) -> f64 {
    weights.combine(
        skill_score(job, &candidate.skills),
        location_score(job, &candidate.locations),
        experience_score(job, candidate.years_experience),
    )
}

/// Scores every job, drops zero scores, and sorts descending.
/// Ties keep the order in which the jobs were supplied.
pub fn recommend_jobs(
    candidate: &CandidatePreferences,
    jobs: Vec<Job>,
    weights: &MatchWeights,
) -> Vec<JobMatch> {
    let mut matches: Vec<JobMatch> = jobs
        .into_iter()
        .map(|job| {
            let match_percentage = job_match_score(&job, candidate, weights);
            JobMatch {
                job,
                match_percentage,
            }
        })
        .filter(|m| m.match_percentage > 0.0)
        .collect();

    matches.sort_by(|a, b| b.match_percentage.total_cmp(&a.match_percentage));
    matches
}
