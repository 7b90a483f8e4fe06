use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use uuid::Uuid;

use crate::server::AppState;
use crate::server::dto::CreateAssignmentRequest;
use crate::server::response::{ApiError, StoreResultExt};
use crate::server::validation::validate_assignment;
use crate::types::AssignmentMeta;

pub async fn create_assignment(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateAssignmentRequest>, JsonRejection>,
) -> Result<Json<AssignmentMeta>, ApiError> {
    let Json(req) = payload?;
    let assignment = validate_assignment(Uuid::new_v4().to_string(), req)?;

    state
        .store
        .create_assignment(&assignment)
        .api_err("Failed to create assignment")?;

    Ok(Json(assignment))
}

pub async fn list_assignments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AssignmentMeta>>, ApiError> {
    let assignments = state
        .store
        .list_assignments()
        .api_err("Failed to list assignments")?;

    Ok(Json(assignments))
}
