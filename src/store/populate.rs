use std::collections::{BTreeSet, HashMap};

use super::Store;
use crate::error::Result;
use crate::types::{AssignmentMeta, PopulatedSubmission};

/// Lists every submission with its assignment reference resolved.
///
/// Two store round trips: all submissions, then one batch fetch of the
/// distinct referenced assignment ids. A reference with no matching
/// assignment resolves to `None` instead of failing the listing.
pub fn list_populated_submissions(store: &dyn Store) -> Result<Vec<PopulatedSubmission>> {
    let submissions = store.list_submissions()?;
    if submissions.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<String> = submissions
        .iter()
        .map(|s| s.assignment_id.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let assignments: HashMap<String, AssignmentMeta> = store
        .get_assignments_by_ids(&ids)?
        .into_iter()
        .map(|a| (a.id.clone(), a))
        .collect();

    let populated = submissions
        .into_iter()
        .map(|submission| {
            let assignment = assignments.get(&submission.assignment_id).cloned();
            if assignment.is_none() {
                tracing::debug!(
                    "Submission {} references missing assignment {}",
                    submission.id,
                    submission.assignment_id
                );
            }
            PopulatedSubmission::new(submission, assignment)
        })
        .collect();

    Ok(populated)
}
