use chrono::{DateTime, NaiveDate, Utc};

use crate::error::ValidationError;
use crate::server::dto::{CreateAssignmentRequest, CreateStudentRequest, CreateSubmissionRequest};
use crate::types::{AssignmentMeta, AssignmentSubmission, Student};

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::missing(field))
}

fn required_key(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    let value = required(value, field)?;
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "cannot be empty"));
    }
    Ok(value)
}

/// Accepts RFC 3339, or a bare `YYYY-MM-DD` date taken as midnight UTC.
fn parse_timestamp(value: &str, field: &'static str) -> Result<DateTime<Utc>, ValidationError> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|ndt| ndt.and_utc())
        .ok_or_else(|| {
            ValidationError::new(field, "expected an RFC 3339 timestamp or a YYYY-MM-DD date")
        })
}

pub fn validate_student(id: String, req: CreateStudentRequest) -> Result<Student, ValidationError> {
    Ok(Student {
        id,
        student_id: required_key(req.student_id, "studentId")?,
        name: required(req.name, "name")?,
        email: required(req.email, "email")?,
    })
}

pub fn validate_assignment(
    id: String,
    req: CreateAssignmentRequest,
) -> Result<AssignmentMeta, ValidationError> {
    Ok(AssignmentMeta {
        id,
        title: required(req.title, "title")?,
        description: required(req.description, "description")?,
        due_date: parse_timestamp(&required(req.due_date, "dueDate")?, "dueDate")?,
        created_by: required(req.created_by, "createdBy")?,
    })
}

/// `now` is used as the submission timestamp when the payload omits one.
pub fn validate_submission(
    id: String,
    req: CreateSubmissionRequest,
    now: DateTime<Utc>,
) -> Result<AssignmentSubmission, ValidationError> {
    Ok(AssignmentSubmission {
        id,
        student_id: required_key(req.student_id, "studentId")?,
        assignment_id: required_key(req.assignment_id, "assignmentId")?,
        content: required(req.content, "content")?,
        version: required(req.version, "version")?,
        timestamp: match req.timestamp {
            Some(value) => parse_timestamp(&value, "timestamp")?,
            None => now,
        },
    })
}
