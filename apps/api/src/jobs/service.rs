//! Job postings owned by industry users.

use tracing::info;
use uuid::Uuid;

use crate::auth::require_industry;
use crate::errors::AppError;
use crate::jobs::posting::JobRequest;
use crate::models::job::Job;
use crate::models::user::User;
use crate::store::Stores;

pub async fn find_job(stores: &Stores, job_id: Uuid) -> Result<Job, AppError> {
    stores
        .jobs
        .find_by_id(job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))
}

/// The job, if `user` is the industry account that posted it.
pub async fn owned_job(stores: &Stores, user: &User, job_id: Uuid) -> Result<Job, AppError> {
    require_industry(user)?;
    let job = find_job(stores, job_id).await?;
    if job.industry_id != Some(user.id) {
        return Err(AppError::Forbidden(format!(
            "Job {job_id} belongs to another industry user"
        )));
    }
    Ok(job)
}

pub async fn create_job(stores: &Stores, owner: &User, request: JobRequest) -> Result<Job, AppError> {
    require_industry(owner)?;
    request.validate()?;

    let job = request.into_job(owner);
    stores.jobs.create(&job).await?;
    info!("{} posted job {} ({:?})", owner.email, job.id, job.title);
    Ok(job)
}

pub async fn update_job(
    stores: &Stores,
    owner: &User,
    job_id: Uuid,
    request: JobRequest,
) -> Result<Job, AppError> {
    let mut job = owned_job(stores, owner, job_id).await?;
    request.validate()?;

    request.apply_to(&mut job);
    stores.jobs.update(&job).await?;
    info!("{} updated job {}", owner.email, job.id);
    Ok(job)
}

/// Applications to the job are kept; their link dangles until reconciled.
pub async fn delete_job(stores: &Stores, owner: &User, job_id: Uuid) -> Result<(), AppError> {
    owned_job(stores, owner, job_id).await?;
    if stores.jobs.delete(job_id).await? {
        info!("{} deleted job {}", owner.email, job_id);
    }
    Ok(())
}

pub async fn posted_jobs(stores: &Stores, owner: &User) -> Result<Vec<Job>, AppError> {
    require_industry(owner)?;
    Ok(stores.jobs.find_by_industry_id(owner.id).await?)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::fixtures;
    use crate::models::user::UserType;
    use crate::store::memory::MemoryStore;

    fn request(title: &str) -> JobRequest {
        JobRequest {
            title: Some(title.to_string()),
            company: Some("Acme".to_string()),
            skills: vec!["Rust".to_string()],
            ..Default::default()
        }
    }

    fn setup() -> (Arc<MemoryStore>, Stores, User) {
        let mem = Arc::new(MemoryStore::default());
        let owner = fixtures::user("hr@acme.io", UserType::Industry);
        let stores = mem.stores();
        (mem, stores, owner)
    }

    #[tokio::test]
    async fn test_create_update_delete() {
        let (mem, stores, owner) = setup();

        let job = create_job(&stores, &owner, request("Rust Dev")).await.unwrap();
        assert_eq!(posted_jobs(&stores, &owner).await.unwrap().len(), 1);

        let updated = update_job(&stores, &owner, job.id, request("Senior Rust Dev"))
            .await
            .unwrap();
        assert_eq!(updated.title.as_deref(), Some("Senior Rust Dev"));
        assert_eq!(
            find_job(&stores, job.id).await.unwrap().title.as_deref(),
            Some("Senior Rust Dev")
        );

        delete_job(&stores, &owner, job.id).await.unwrap();
        assert!(mem.jobs.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_only_owner_may_change_job() {
        let (_, stores, owner) = setup();
        let job = create_job(&stores, &owner, request("Rust Dev")).await.unwrap();
        let rival = fixtures::user("hr@globex.io", UserType::Industry);

        let err = update_job(&stores, &rival, job.id, request("Hijacked")).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
        let err = delete_job(&stores, &rival, job.id).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
        assert_eq!(find_job(&stores, job.id).await.unwrap().title.as_deref(), Some("Rust Dev"));
    }

    #[tokio::test]
    async fn test_applicants_cannot_post() {
        let (_, stores, _) = setup();
        let applicant = fixtures::user("dev@mail.io", UserType::Applicant);
        let err = create_job(&stores, &applicant, request("Rust Dev")).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_invalid_request_is_rejected() {
        let (mem, stores, owner) = setup();
        let err = create_job(&stores, &owner, JobRequest::default()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(mem.jobs.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_job_is_not_found() {
        let (_, stores, owner) = setup();
        let err = delete_job(&stores, &owner, Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
