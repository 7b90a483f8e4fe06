use super::Store;
use crate::error::{Error, Result};
use crate::types::*;

/// Stands in for a database that could not be opened at startup.
///
/// The server keeps accepting requests; every store call fails with
/// `Error::Unavailable` carrying the original startup error.
pub struct UnavailableStore {
    reason: String,
}

impl UnavailableStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn fail<T>(&self) -> Result<T> {
        Err(Error::Unavailable(self.reason.clone()))
    }
}

impl Store for UnavailableStore {
    fn initialize(&self) -> Result<()> {
        self.fail()
    }

    fn create_student(&self, _student: &Student) -> Result<()> {
        self.fail()
    }

    fn list_students(&self) -> Result<Vec<Student>> {
        self.fail()
    }

    fn create_assignment(&self, _assignment: &AssignmentMeta) -> Result<()> {
        self.fail()
    }

    fn list_assignments(&self) -> Result<Vec<AssignmentMeta>> {
        self.fail()
    }

    fn get_assignments_by_ids(&self, _ids: &[String]) -> Result<Vec<AssignmentMeta>> {
        self.fail()
    }

    fn create_submission(&self, _submission: &AssignmentSubmission) -> Result<()> {
        self.fail()
    }

    fn list_submissions(&self) -> Result<Vec<AssignmentSubmission>> {
        self.fail()
    }
}
