use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use chrono::Utc;
use uuid::Uuid;

use crate::server::AppState;
use crate::server::dto::CreateSubmissionRequest;
use crate::server::response::{ApiError, StoreResultExt};
use crate::server::validation::validate_submission;
use crate::store::list_populated_submissions;
use crate::types::{AssignmentSubmission, PopulatedSubmission};

pub async fn create_submission(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateSubmissionRequest>, JsonRejection>,
) -> Result<Json<AssignmentSubmission>, ApiError> {
    let Json(req) = payload?;
    let submission = validate_submission(Uuid::new_v4().to_string(), req, Utc::now())?;

    // The store's unique index decides duplicates; no lookup beforehand.
    state
        .store
        .create_submission(&submission)
        .api_err("Failed to create submission")?;

    Ok(Json(submission))
}

pub async fn list_submissions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PopulatedSubmission>>, ApiError> {
    let submissions =
        list_populated_submissions(state.store.as_ref()).api_err("Failed to list submissions")?;

    Ok(Json(submissions))
}
