use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::{debug, error};
use uuid::Uuid;

use crate::models::activity::ActivityEvent;
use crate::models::application::{ApplicationStatus, HackathonApplication, JobApplication};
use crate::models::job::Job;
use crate::models::profile::UserProfile;
use crate::models::shortlist::Shortlist;
use crate::models::user::{SubscriptionTier, User, UserRow};
use crate::store::{
    ActivityLogger, ApplicationStore, HackathonApplicationStore, JobStore, ProfileStore,
    ShortlistStore, StoreError, StoreResult, UserStore,
};

/// PostgreSQL binding for every store trait.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobStore for PgStore {
    async fn find_all(&self) -> StoreResult<Vec<Job>> {
        Ok(
            sqlx::query_as::<_, Job>("SELECT * FROM jobs ORDER BY created_at DESC")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Job>> {
        Ok(sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn find_by_industry_id(&self, industry_id: Uuid) -> StoreResult<Vec<Job>> {
        Ok(sqlx::query_as::<_, Job>(
            "SELECT * FROM jobs WHERE industry_id = $1 ORDER BY created_at DESC",
        )
        .bind(industry_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn create(&self, job: &Job) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO jobs
                (id, title, description, company, location, posted_by, industry_id, industry,
                 skills, employment_type, job_min_salary, job_max_salary, job_salary_currency,
                 years_of_experience, created_at, active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            "#,
        )
        .bind(job.id)
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.company)
        .bind(&job.location)
        .bind(&job.posted_by)
        .bind(job.industry_id)
        .bind(&job.industry)
        .bind(&job.skills)
        .bind(&job.employment_type)
        .bind(job.job_min_salary)
        .bind(job.job_max_salary)
        .bind(&job.job_salary_currency)
        .bind(job.years_of_experience)
        .bind(job.created_at)
        .bind(job.active)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update(&self, job: &Job) -> StoreResult<()> {
        sqlx::query(
            r#"
            UPDATE jobs SET
                title = $2, description = $3, company = $4, location = $5, industry = $6,
                skills = $7, employment_type = $8, job_min_salary = $9, job_max_salary = $10,
                job_salary_currency = $11, years_of_experience = $12, active = $13
            WHERE id = $1
            "#,
        )
        .bind(job.id)
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.company)
        .bind(&job.location)
        .bind(&job.industry)
        .bind(&job.skills)
        .bind(&job.employment_type)
        .bind(job.job_min_salary)
        .bind(job.job_max_salary)
        .bind(&job.job_salary_currency)
        .bind(job.years_of_experience)
        .bind(job.active)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl ProfileStore for PgStore {
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<UserProfile>> {
        let doc: Option<Json<UserProfile>> =
            sqlx::query_scalar("SELECT data FROM user_profiles WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(doc.map(|Json(profile)| with_row_id(profile, id)))
    }

    async fn find_by_applicant_email(&self, email: &str) -> StoreResult<Option<UserProfile>> {
        let row: Option<(Uuid, Json<UserProfile>)> =
            sqlx::query_as("SELECT id, data FROM user_profiles WHERE applicant_email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(|(id, Json(profile))| with_row_id(profile, id)))
    }

    async fn list_applicant_profiles(&self) -> StoreResult<Vec<UserProfile>> {
        let rows: Vec<(Uuid, Json<UserProfile>)> = sqlx::query_as(
            r#"
            SELECT p.id, p.data
            FROM user_profiles p
            JOIN users u ON u.email = p.applicant_email
            WHERE u.user_type = 'APPLICANT'
            ORDER BY p.applicant_email
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|(id, Json(profile))| with_row_id(profile, id))
            .collect())
    }

    async fn upsert(&self, profile: &UserProfile) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO user_profiles (id, applicant_email, data)
            VALUES ($1, $2, $3)
            ON CONFLICT (applicant_email) DO UPDATE SET data = EXCLUDED.data
            "#,
        )
        .bind(profile.id)
        .bind(&profile.applicant_email)
        .bind(Json(profile))
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

/// The row key is authoritative over whatever id the document carries.
fn with_row_id(mut profile: UserProfile, id: Uuid) -> UserProfile {
    profile.id = id;
    profile
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT id, name, email, picture_url, user_type, subscription_type FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            None => Ok(None),
            Some(row) => {
                let id = row.id;
                let user_type = row.user_type.clone();
                row.into_user().map(Some).ok_or_else(|| StoreError::Corrupt {
                    id,
                    reason: format!("unknown user_type '{user_type}'"),
                })
            }
        }
    }

    async fn update_subscription(&self, user_id: Uuid, tier: SubscriptionTier) -> StoreResult<()> {
        sqlx::query("UPDATE users SET subscription_type = $1 WHERE id = $2")
            .bind(tier.as_str())
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl ApplicationStore for PgStore {
    async fn find_all(&self) -> StoreResult<Vec<JobApplication>> {
        Ok(sqlx::query_as::<_, JobApplication>(
            "SELECT * FROM job_applications ORDER BY applied_at DESC",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<JobApplication>> {
        Ok(sqlx::query_as::<_, JobApplication>("SELECT * FROM job_applications WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn find_by_job_id(&self, job_id: Uuid) -> StoreResult<Vec<JobApplication>> {
        Ok(sqlx::query_as::<_, JobApplication>(
            "SELECT * FROM job_applications WHERE job_id = $1 ORDER BY applied_at DESC",
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn find_by_applicant_email(&self, email: &str) -> StoreResult<Vec<JobApplication>> {
        Ok(sqlx::query_as::<_, JobApplication>(
            "SELECT * FROM job_applications WHERE applicant_email = $1",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn create(&self, application: &JobApplication) -> StoreResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO job_applications
                (id, job_id, applicant_email, applicant_id, job_title, company, location,
                 status, applied_at, last_updated)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (job_id, applicant_email) WHERE job_id IS NOT NULL DO NOTHING
            "#,
        )
        .bind(application.id)
        .bind(application.job_id)
        .bind(&application.applicant_email)
        .bind(application.applicant_id)
        .bind(&application.job_title)
        .bind(&application.company)
        .bind(&application.location)
        .bind(&application.status)
        .bind(application.applied_at)
        .bind(application.last_updated)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn update_status(&self, application_id: Uuid, status: ApplicationStatus) -> StoreResult<()> {
        sqlx::query("UPDATE job_applications SET status = $1, last_updated = NOW() WHERE id = $2")
            .bind(status.as_str())
            .bind(application_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn reassign_job(&self, application_id: Uuid, job_id: Uuid) -> StoreResult<()> {
        sqlx::query("UPDATE job_applications SET job_id = $1, last_updated = NOW() WHERE id = $2")
            .bind(job_id)
            .bind(application_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl HackathonApplicationStore for PgStore {
    async fn find_by_applicant_id(
        &self,
        applicant_id: Uuid,
    ) -> StoreResult<Vec<HackathonApplication>> {
        Ok(sqlx::query_as::<_, HackathonApplication>(
            "SELECT * FROM hackathon_applications WHERE applicant_id = $1",
        )
        .bind(applicant_id)
        .fetch_all(&self.pool)
        .await?)
    }
}

#[async_trait]
impl ShortlistStore for PgStore {
    async fn find_by_industry_email(&self, industry_email: &str) -> StoreResult<Vec<Shortlist>> {
        Ok(sqlx::query_as::<_, Shortlist>(
            "SELECT * FROM industry_shortlists WHERE industry_email = $1 ORDER BY shortlisted_at DESC",
        )
        .bind(industry_email)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn exists(&self, industry_email: &str, student_email: &str) -> StoreResult<bool> {
        Ok(sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM industry_shortlists WHERE industry_email = $1 AND student_email = $2)",
        )
        .bind(industry_email)
        .bind(student_email)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn create(&self, shortlist: Shortlist) -> StoreResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO industry_shortlists
                (id, industry_email, industry_id, student_email, student_id, shortlisted_at, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (industry_email, student_email) DO NOTHING
            "#,
        )
        .bind(shortlist.id)
        .bind(&shortlist.industry_email)
        .bind(shortlist.industry_id)
        .bind(&shortlist.student_email)
        .bind(shortlist.student_id)
        .bind(shortlist.shortlisted_at)
        .bind(&shortlist.notes)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, industry_email: &str, student_email: &str) -> StoreResult<bool> {
        let result = sqlx::query(
            "DELETE FROM industry_shortlists WHERE industry_email = $1 AND student_email = $2",
        )
        .bind(industry_email)
        .bind(student_email)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

impl ActivityLogger for PgStore {
    fn record(&self, event: ActivityEvent) {
        let pool = self.pool.clone();
        tokio::spawn(async move {
            let result = sqlx::query(
                r#"
                INSERT INTO activity_logs
                    (id, actor_email, actor_id, subject_email, subject_id, action_type, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(&event.actor_email)
            .bind(event.actor_id)
            .bind(&event.subject_email)
            .bind(event.subject_id)
            .bind(event.action.as_str())
            .bind(event.timestamp)
            .execute(&pool)
            .await;

            match result {
                Ok(_) => debug!(
                    "Recorded {} by {} on {}",
                    event.action.as_str(),
                    event.actor_email,
                    event.subject_email
                ),
                Err(e) => error!(
                    "Failed to record {} by {} on {}: {e}",
                    event.action.as_str(),
                    event.actor_email,
                    event.subject_email
                ),
            }
        });
    }
}
