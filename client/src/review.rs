//! Submission review: moving a submission out of `Pending` and keeping
//! the loaded list consistent without a refetch.

use uact_shared::application::{Decision, Submission};

use crate::raw;
use crate::{Context, Error};

impl Context {
    /// Submissions visible to the reviewer, optionally restricted to one
    /// program.
    pub async fn submissions(&self, program: Option<u64>) -> Result<Vec<Submission>, Error> {
        raw::call(raw::application::ListSubmissions { program }, self).await
    }

    /// Send a reviewer decision for a pending submission.
    ///
    /// The status is re-checked locally before the call fires: the
    /// submission could have been decided server-side between render and
    /// click, and a terminal status must never emit the request. A
    /// server-side "already decided" answer maps to [`Error::Conflict`];
    /// callers surface it and refresh the list.
    pub async fn decide(
        &self,
        submission: &Submission,
        decision: Decision,
    ) -> Result<Submission, Error> {
        submission
            .status
            .apply(decision)
            .map_err(|err| Error::Conflict(err.to_string()))?;

        raw::call(
            raw::application::Decide {
                submission_id: submission.id,
                decision,
            },
            self,
        )
        .await
    }
}

/// Patch the already-loaded list with the decided submission, giving
/// immediate feedback without a refetch. Returns false when the id is no
/// longer in the list.
pub fn apply_decision(list: &mut [Submission], updated: &Submission) -> bool {
    match list.iter_mut().find(|s| s.id == updated.id) {
        Some(slot) => {
            *slot = updated.clone();
            true
        }
        None => false,
    }
}

/// One program's submissions in the grouped review view.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramGroup {
    pub program_id: u64,
    pub program_name: String,
    pub submissions: Vec<Submission>,
}

/// Fold the flat submission list into per-program groups, preserving
/// first-seen program order and submission order within a group. Pure
/// presentation; the backend has no grouping concept.
pub fn group_by_program(submissions: &[Submission]) -> Vec<ProgramGroup> {
    let mut groups: Vec<ProgramGroup> = Vec::new();
    for submission in submissions {
        match groups
            .iter_mut()
            .find(|g| g.program_id == submission.program_id)
        {
            Some(group) => group.submissions.push(submission.clone()),
            None => groups.push(ProgramGroup {
                program_id: submission.program_id,
                program_name: submission.program_name.clone(),
                submissions: vec![submission.clone()],
            }),
        }
    }
    groups
}
