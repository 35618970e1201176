pub mod handle;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::program::Program;

/// A student's request to join a program, immutable once created.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Application {
    /// The only id of this application.
    pub id: u64,
    pub program_id: u64,
    pub student_id: u64,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub submitted_at: DateTime<Utc>,
}

/// The reviewable unit derived from an application, as the admin review
/// endpoints serve it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Submission {
    /// The only id of this submission.
    pub id: u64,
    pub application_id: u64,
    pub program_id: u64,
    pub program_name: String,
    /// Display name of the submitting student.
    pub student_name: String,
    /// Course/section snapshot taken at submission time.
    pub course: String,
    pub section: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub status: SubmissionStatus,
}

/// Review status of a submission.
///
/// `Pending` is the only state with outgoing transitions; `Approved` and
/// `Rejected` are terminal.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionStatus::Pending)
    }

    /// Apply a reviewer decision, rejecting the transition when the
    /// submission has already been decided.
    pub fn apply(self, decision: Decision) -> Result<Self, AlreadyDecided> {
        match self {
            SubmissionStatus::Pending => Ok(match decision {
                Decision::Approve => SubmissionStatus::Approved,
                Decision::Reject => SubmissionStatus::Rejected,
            }),
            terminal => Err(AlreadyDecided(terminal)),
        }
    }
}

/// A reviewer's verdict on a pending submission.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approve,
    Reject,
}

/// Returned when a decision targets a submission that already reached a
/// terminal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("submission already decided ({0:?})")]
pub struct AlreadyDecided(pub SubmissionStatus);

/// A student's own application record from the service-history endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HistoryEntry {
    pub id: u64,
    pub program: Program,
    pub submitted_at: DateTime<Utc>,
    /// Review status of the submission derived from this application.
    pub current_status: SubmissionStatus,
}
