use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The settlement unit crediting hours once a submission is approved.
///
/// Appears on the accreditation endpoints after the upstream submission
/// reaches `Approved`; mutated exactly once by the credit action.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AccreditationRecord {
    /// The only id of this record.
    pub id: u64,
    pub student_id: u64,
    pub student_name: String,
    pub program_id: u64,
    pub program_name: String,
    /// Facilitator and hours snapshotted from the program.
    pub facilitator: String,
    pub hours: u32,
    /// Scheduled date of the program, for completion derivation.
    pub date: NaiveDate,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    /// Reflects upstream submission approval.
    pub submission_accepted: bool,
    /// Set by the manual credit action; terminal once true.
    pub approved: bool,
}

impl AccreditationRecord {
    /// The manual credit action is only available while the submission is
    /// accepted and the record has not been approved yet.
    pub fn approvable(&self) -> bool {
        self.submission_accepted && !self.approved
    }

    /// Human-readable completion state, derived from the scheduled date
    /// and the approval flag. Presentation only; `submission_accepted`
    /// and `approved` stay authoritative.
    pub fn completion_status(&self, today: NaiveDate) -> CompletionStatus {
        if self.approved {
            CompletionStatus::Credited
        } else if self.date > today {
            CompletionStatus::Upcoming
        } else {
            CompletionStatus::Completed
        }
    }
}

/// Derived display status of an accreditation record.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CompletionStatus {
    /// Program date is still in the future.
    Upcoming,
    /// Program date has passed but hours are not credited yet.
    Completed,
    /// Hours have been credited.
    Credited,
}
