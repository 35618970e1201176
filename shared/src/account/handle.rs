use serde::{Deserialize, Serialize};

use super::UserSummary;

#[derive(Serialize, Deserialize)]
pub struct LoginDescriptor {
    pub username: String,
    pub password: String,
}

/// Body of a successful login response.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginResult {
    pub token: String,
    pub is_admin: bool,
    pub is_student: bool,
    pub username: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SignupDescriptor {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub course: String,
    pub year_level: String,
    pub section: String,
    pub phone_number: String,
}

impl SignupDescriptor {
    /// All fields the signup form requires, for presence checks before
    /// any network call.
    pub fn required_fields(&self) -> [(&'static str, &str); 9] {
        [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
            ("username", &self.username),
            ("password", &self.password),
            ("course", &self.course),
            ("year_level", &self.year_level),
            ("section", &self.section),
            ("phone_number", &self.phone_number),
        ]
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SignupResult {
    pub username: String,
}

/// The admin-editable subset of a student profile.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StudentPatch {
    pub course: String,
    pub year_level: String,
    pub section: String,
    pub phone_number: String,
}

/// A student's own hour-progress view.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProgressSummary {
    pub user: UserSummary,
    pub course: String,
    pub year_level: String,
    pub section: String,
    pub hours_completed: u32,
    pub total_required_hours: u32,
}
