pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::applications::handlers as applications;
use crate::jobs::handlers as jobs;
use crate::matching::handlers as matching;
use crate::profiles::handlers as profiles;
use crate::state::AppState;
use crate::students::handlers as students;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Jobs
        .route(
            "/api/v1/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_create_job),
        )
        .route(
            "/api/v1/jobs/recommended",
            get(matching::handle_recommended_jobs),
        )
        .route("/api/v1/jobs/mine", get(jobs::handle_posted_jobs))
        .route(
            "/api/v1/jobs/:id",
            get(jobs::handle_get_job)
                .put(jobs::handle_update_job)
                .delete(jobs::handle_delete_job),
        )
        .route("/api/v1/jobs/:id/apply", post(applications::handle_apply))
        .route(
            "/api/v1/jobs/:id/applications",
            get(applications::handle_job_applications),
        )
        .route(
            "/api/v1/jobs/:id/applications/reconcile",
            post(applications::handle_reconcile),
        )
        // Applications
        .route(
            "/api/v1/applications",
            get(applications::handle_my_applications),
        )
        .route(
            "/api/v1/applications/:id/status",
            put(applications::handle_update_status),
        )
        // Applicant profile
        .route(
            "/api/v1/profile",
            get(profiles::handle_get_profile)
                .post(profiles::handle_save_profile)
                .put(profiles::handle_save_profile),
        )
        // Student directory (industry users)
        .route("/api/v1/students", get(students::handle_list_students))
        .route(
            "/api/v1/students/shortlisted",
            get(students::handle_shortlisted),
        )
        .route(
            "/api/v1/students/subscription/info",
            get(students::handle_subscription_info),
        )
        .route(
            "/api/v1/students/subscription/update",
            post(students::handle_subscription_update),
        )
        .route("/api/v1/students/:id", get(students::handle_get_student))
        .route(
            "/api/v1/students/:id/shortlist",
            post(students::handle_shortlist).delete(students::handle_remove_shortlist),
        )
        .route(
            "/api/v1/students/:id/resume/download",
            get(students::handle_download_resume),
        )
        .with_state(state)
}
