mod assignments;
mod students;
mod submissions;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::server::AppState;

pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        // Student routes
        .route("/student", post(students::create_student))
        .route("/students", get(students::list_students))
        // Assignment routes
        .route("/assignment", post(assignments::create_assignment))
        .route("/assignments", get(assignments::list_assignments))
        // Submission routes
        .route("/submit", post(submissions::create_submission))
        .route("/submissions", get(submissions::list_submissions))
}
