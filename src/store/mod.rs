mod populate;
mod schema;
mod sqlite;
mod unavailable;

pub use populate::list_populated_submissions;
pub use sqlite::SqliteStore;
pub use unavailable::UnavailableStore;

use crate::error::Result;
use crate::types::*;

/// Store defines the record store interface.
///
/// Uniqueness of `Student::student_id` and of a submission's
/// `(student_id, assignment_id, version)` is enforced by the implementation
/// atomically on insert; a violating insert returns `Error::Conflict`.
pub trait Store: Send + Sync {
    fn initialize(&self) -> Result<()>;

    // Student operations
    fn create_student(&self, student: &Student) -> Result<()>;
    fn list_students(&self) -> Result<Vec<Student>>;

    // Assignment operations
    fn create_assignment(&self, assignment: &AssignmentMeta) -> Result<()>;
    fn list_assignments(&self) -> Result<Vec<AssignmentMeta>>;
    /// Fetches every assignment whose id is in `ids`. Unknown ids are skipped.
    fn get_assignments_by_ids(&self, ids: &[String]) -> Result<Vec<AssignmentMeta>>;

    // Submission operations
    fn create_submission(&self, submission: &AssignmentSubmission) -> Result<()>;
    fn list_submissions(&self) -> Result<Vec<AssignmentSubmission>>;
}
