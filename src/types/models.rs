use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub student_id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentMeta {
    pub id: String,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub created_by: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentSubmission {
    pub id: String,
    pub student_id: String,
    /// Id of an [`AssignmentMeta`]. Not checked on insert.
    pub assignment_id: String,
    pub content: String,
    pub version: i64,
    pub timestamp: DateTime<Utc>,
}

/// A submission with its assignment reference resolved.
///
/// `assignment_id` holds the full assignment record, or `None` when the
/// referenced assignment no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedSubmission {
    pub id: String,
    pub student_id: String,
    pub assignment_id: Option<AssignmentMeta>,
    pub content: String,
    pub version: i64,
    pub timestamp: DateTime<Utc>,
}

impl PopulatedSubmission {
    pub fn new(submission: AssignmentSubmission, assignment: Option<AssignmentMeta>) -> Self {
        Self {
            id: submission.id,
            student_id: submission.student_id,
            assignment_id: assignment,
            content: submission.content,
            version: submission.version,
            timestamp: submission.timestamp,
        }
    }
}
