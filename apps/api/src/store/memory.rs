use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::models::activity::ActivityEvent;
use crate::models::application::{ApplicationStatus, HackathonApplication, JobApplication};
use crate::models::job::Job;
use crate::models::profile::UserProfile;
use crate::models::shortlist::Shortlist;
use crate::models::user::{SubscriptionTier, User, UserType};
use crate::store::{
    ActivityLogger, ApplicationStore, HackathonApplicationStore, JobStore, ProfileStore,
    ShortlistStore, StoreError, StoreResult, Stores, UserStore,
};

/// In-process store for tests. Count lookups can be made to fail on demand.
#[derive(Default)]
pub struct MemoryStore {
    pub jobs: Mutex<Vec<Job>>,
    pub profiles: Mutex<Vec<UserProfile>>,
    pub users: Mutex<Vec<User>>,
    pub applications: Mutex<Vec<JobApplication>>,
    pub hackathon_applications: Mutex<Vec<HackathonApplication>>,
    pub shortlists: Mutex<Vec<Shortlist>>,
    pub activity: Mutex<Vec<ActivityEvent>>,
    pub fail_hackathon_lookups: AtomicBool,
    pub fail_application_lookups: AtomicBool,
}

impl MemoryStore {
    pub fn stores(self: &Arc<Self>) -> Stores {
        Stores::from_backend(self.clone())
    }

    pub fn add_job(&self, job: Job) {
        self.jobs.lock().unwrap().push(job);
    }

    pub fn add_profile(&self, profile: UserProfile) {
        self.profiles.lock().unwrap().push(profile);
    }

    pub fn add_user(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }

    pub fn add_application(&self, application: JobApplication) {
        self.applications.lock().unwrap().push(application);
    }

    pub fn add_hackathon_application(&self, application: HackathonApplication) {
        self.hackathon_applications.lock().unwrap().push(application);
    }

    pub fn recorded_activity(&self) -> Vec<ActivityEvent> {
        self.activity.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobStore for MemoryStore {
    async fn find_all(&self) -> StoreResult<Vec<Job>> {
        Ok(self.jobs.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Job>> {
        Ok(self.jobs.lock().unwrap().iter().find(|j| j.id == id).cloned())
    }

    async fn find_by_industry_id(&self, industry_id: Uuid) -> StoreResult<Vec<Job>> {
        Ok(self
            .jobs
            .lock()
            .unwrap()
            .iter()
            .filter(|j| j.industry_id == Some(industry_id))
            .cloned()
            .collect())
    }

    async fn create(&self, job: &Job) -> StoreResult<()> {
        self.jobs.lock().unwrap().push(job.clone());
        Ok(())
    }

    async fn update(&self, job: &Job) -> StoreResult<()> {
        if let Some(stored) = self.jobs.lock().unwrap().iter_mut().find(|j| j.id == job.id) {
            *stored = job.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let mut jobs = self.jobs.lock().unwrap();
        let before = jobs.len();
        jobs.retain(|j| j.id != id);
        Ok(jobs.len() < before)
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<UserProfile>> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn find_by_applicant_email(&self, email: &str) -> StoreResult<Option<UserProfile>> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.applicant_email == email)
            .cloned())
    }

    async fn list_applicant_profiles(&self) -> StoreResult<Vec<UserProfile>> {
        let users = self.users.lock().unwrap();
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .filter(|p| {
                users
                    .iter()
                    .any(|u| u.email == p.applicant_email && u.user_type == UserType::Applicant)
            })
            .cloned()
            .collect())
    }

    async fn upsert(&self, profile: &UserProfile) -> StoreResult<()> {
        let mut profiles = self.profiles.lock().unwrap();
        match profiles
            .iter_mut()
            .find(|p| p.applicant_email == profile.applicant_email)
        {
            Some(stored) => *stored = profile.clone(),
            None => profiles.push(profile.clone()),
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn update_subscription(&self, user_id: Uuid, tier: SubscriptionTier) -> StoreResult<()> {
        if let Some(user) = self.users.lock().unwrap().iter_mut().find(|u| u.id == user_id) {
            user.subscription_tier = tier;
        }
        Ok(())
    }
}

#[async_trait]
impl ApplicationStore for MemoryStore {
    async fn find_all(&self) -> StoreResult<Vec<JobApplication>> {
        Ok(self.applications.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<JobApplication>> {
        Ok(self
            .applications
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn find_by_job_id(&self, job_id: Uuid) -> StoreResult<Vec<JobApplication>> {
        Ok(self
            .applications
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.job_id == Some(job_id))
            .cloned()
            .collect())
    }

    async fn find_by_applicant_email(&self, email: &str) -> StoreResult<Vec<JobApplication>> {
        if self.fail_application_lookups.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("job applications offline".to_string()));
        }
        Ok(self
            .applications
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.applicant_email == email)
            .cloned()
            .collect())
    }

    async fn create(&self, application: &JobApplication) -> StoreResult<bool> {
        let mut applications = self.applications.lock().unwrap();
        let duplicate = application.job_id.is_some()
            && applications.iter().any(|a| {
                a.job_id == application.job_id && a.applicant_email == application.applicant_email
            });
        if duplicate {
            return Ok(false);
        }
        applications.push(application.clone());
        Ok(true)
    }

    async fn update_status(&self, application_id: Uuid, status: ApplicationStatus) -> StoreResult<()> {
        if let Some(app) = self
            .applications
            .lock()
            .unwrap()
            .iter_mut()
            .find(|a| a.id == application_id)
        {
            app.status = status.as_str().to_string();
            app.last_updated = Utc::now();
        }
        Ok(())
    }

    async fn reassign_job(&self, application_id: Uuid, job_id: Uuid) -> StoreResult<()> {
        if let Some(app) = self
            .applications
            .lock()
            .unwrap()
            .iter_mut()
            .find(|a| a.id == application_id)
        {
            app.job_id = Some(job_id);
        }
        Ok(())
    }
}

#[async_trait]
impl HackathonApplicationStore for MemoryStore {
    async fn find_by_applicant_id(
        &self,
        applicant_id: Uuid,
    ) -> StoreResult<Vec<HackathonApplication>> {
        if self.fail_hackathon_lookups.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("hackathon applications offline".to_string()));
        }
        Ok(self
            .hackathon_applications
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.applicant_id == applicant_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ShortlistStore for MemoryStore {
    async fn find_by_industry_email(&self, industry_email: &str) -> StoreResult<Vec<Shortlist>> {
        Ok(self
            .shortlists
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.industry_email == industry_email)
            .cloned()
            .collect())
    }

    async fn exists(&self, industry_email: &str, student_email: &str) -> StoreResult<bool> {
        Ok(self
            .shortlists
            .lock()
            .unwrap()
            .iter()
            .any(|s| s.industry_email == industry_email && s.student_email == student_email))
    }

    async fn create(&self, shortlist: Shortlist) -> StoreResult<bool> {
        let mut shortlists = self.shortlists.lock().unwrap();
        let exists = shortlists.iter().any(|s| {
            s.industry_email == shortlist.industry_email && s.student_email == shortlist.student_email
        });
        if exists {
            return Ok(false);
        }
        shortlists.push(shortlist);
        Ok(true)
    }

    async fn delete(&self, industry_email: &str, student_email: &str) -> StoreResult<bool> {
        let mut shortlists = self.shortlists.lock().unwrap();
        let before = shortlists.len();
        shortlists.retain(|s| !(s.industry_email == industry_email && s.student_email == student_email));
        Ok(shortlists.len() < before)
    }
}

impl ActivityLogger for MemoryStore {
    fn record(&self, event: ActivityEvent) {
        self.activity.lock().unwrap().push(event);
    }
}
