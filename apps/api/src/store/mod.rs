//! Store traits over jobs, profiles, users, applications, shortlists and the audit trail.
//!
//! Handlers never touch the database directly. `AppState` carries the traits
//! bundled in [`Stores`].
//! Production binding: [`postgres::PgStore`]. Tests: `memory::MemoryStore`.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::activity::ActivityEvent;
use crate::models::application::{ApplicationStatus, HackathonApplication, JobApplication};
use crate::models::job::Job;
use crate::models::profile::UserProfile;
use crate::models::shortlist::Shortlist;
use crate::models::user::{SubscriptionTier, User};

pub mod postgres;

#[cfg(test)]
pub mod memory;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Corrupt record {id}: {reason}")]
    Corrupt { id: Uuid, reason: String },

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait JobStore: Send + Sync {
    async fn find_all(&self) -> StoreResult<Vec<Job>>;
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Job>>;
    async fn find_by_industry_id(&self, industry_id: Uuid) -> StoreResult<Vec<Job>>;
    async fn create(&self, job: &Job) -> StoreResult<()>;
    async fn update(&self, job: &Job) -> StoreResult<()>;
    /// Returns whether a job was removed. Its applications are kept.
    async fn delete(&self, id: Uuid) -> StoreResult<bool>;
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<UserProfile>>;
    async fn find_by_applicant_email(&self, email: &str) -> StoreResult<Option<UserProfile>>;
    /// Profiles whose owning user is an APPLICANT.
    async fn list_applicant_profiles(&self) -> StoreResult<Vec<UserProfile>>;
    /// Inserts or replaces the profile keyed by its applicant email.
    async fn upsert(&self, profile: &UserProfile) -> StoreResult<()>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;
    async fn update_subscription(&self, user_id: Uuid, tier: SubscriptionTier) -> StoreResult<()>;
}

#[async_trait]
pub trait ApplicationStore: Send + Sync {
    async fn find_all(&self) -> StoreResult<Vec<JobApplication>>;
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<JobApplication>>;
    async fn find_by_job_id(&self, job_id: Uuid) -> StoreResult<Vec<JobApplication>>;
    async fn find_by_applicant_email(&self, email: &str) -> StoreResult<Vec<JobApplication>>;
    /// Returns false when the applicant already has an application for the job.
    async fn create(&self, application: &JobApplication) -> StoreResult<bool>;
    async fn update_status(&self, application_id: Uuid, status: ApplicationStatus) -> StoreResult<()>;
    /// Points an application at `job_id`.
    async fn reassign_job(&self, application_id: Uuid, job_id: Uuid) -> StoreResult<()>;
}

#[async_trait]
pub trait HackathonApplicationStore: Send + Sync {
    async fn find_by_applicant_id(&self, applicant_id: Uuid)
        -> StoreResult<Vec<HackathonApplication>>;
}

#[async_trait]
pub trait ShortlistStore: Send + Sync {
    async fn find_by_industry_email(&self, industry_email: &str) -> StoreResult<Vec<Shortlist>>;
    async fn exists(&self, industry_email: &str, student_email: &str) -> StoreResult<bool>;
    /// Returns false when the pair was already shortlisted.
    async fn create(&self, shortlist: Shortlist) -> StoreResult<bool>;
    /// Returns whether a record was removed.
    async fn delete(&self, industry_email: &str, student_email: &str) -> StoreResult<bool>;
}

/// Fire-and-forget audit sink. Implementations must not block the caller
/// and must swallow (and log) their own failures.
pub trait ActivityLogger: Send + Sync {
    fn record(&self, event: ActivityEvent);
}

/// Every collaborator the handlers need, as trait objects.
#[derive(Clone)]
pub struct Stores {
    pub jobs: Arc<dyn JobStore>,
    pub profiles: Arc<dyn ProfileStore>,
    pub users: Arc<dyn UserStore>,
    pub applications: Arc<dyn ApplicationStore>,
    pub hackathon_applications: Arc<dyn HackathonApplicationStore>,
    pub shortlists: Arc<dyn ShortlistStore>,
    pub activity: Arc<dyn ActivityLogger>,
}

impl Stores {
    /// Binds every trait to the same backing store.
    pub fn from_backend<B>(backend: Arc<B>) -> Self
    where
        B: JobStore
            + ProfileStore
            + UserStore
            + ApplicationStore
            + HackathonApplicationStore
            + ShortlistStore
            + ActivityLogger
            + 'static,
    {
        Stores {
            jobs: backend.clone(),
            profiles: backend.clone(),
            users: backend.clone(),
            applications: backend.clone(),
            hackathon_applications: backend.clone(),
            shortlists: backend.clone(),
            activity: backend,
        }
    }
}
