use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use uuid::Uuid;

use crate::server::AppState;
use crate::server::dto::CreateStudentRequest;
use crate::server::response::{ApiError, StoreResultExt};
use crate::server::validation::validate_student;
use crate::types::Student;

pub async fn create_student(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateStudentRequest>, JsonRejection>,
) -> Result<Json<Student>, ApiError> {
    let Json(req) = payload?;
    let student = validate_student(Uuid::new_v4().to_string(), req)?;

    state
        .store
        .create_student(&student)
        .api_err("Failed to create student")?;

    Ok(Json(student))
}

pub async fn list_students(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let students = state
        .store
        .list_students()
        .api_err("Failed to list students")?;

    Ok(Json(students))
}
