pub mod handle;

use serde::{Deserialize, Serialize};

/// Role of the acting user, derived once from the login response flags
/// and trusted for the duration of the session. The server stays
/// authoritative on every request.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    Student,
    /// No session, or the backend reported neither role flag.
    Unknown,
}

impl Role {
    /// Derive a role from the `is_admin`/`is_student` flags of a login
    /// response. `is_admin` wins when both are set.
    pub fn from_flags(is_admin: bool, is_student: bool) -> Self {
        if is_admin {
            Role::Admin
        } else if is_student {
            Role::Student
        } else {
            Role::Unknown
        }
    }
}

/// The read-only user block nested inside student-facing records.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
}

/// A student record as the admin management screens see it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StudentProfile {
    /// The only id of this profile.
    pub id: u64,
    pub user: UserSummary,
    pub course: String,
    pub year_level: String,
    pub section: String,
    pub phone_number: String,
    /// Mutated only by accreditation settlement on the backend.
    pub hours_completed: u32,
    pub total_required_hours: u32,
}
