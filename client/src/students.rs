//! Admin student management. Only the four profile fields in
//! [`StudentPatch`] are editable; identity and hour tallies are
//! server-owned.

use uact_shared::account::handle::StudentPatch;
use uact_shared::account::StudentProfile;

use crate::raw;
use crate::{Context, Error};

impl Context {
    pub async fn students(&self) -> Result<Vec<StudentProfile>, Error> {
        raw::call(raw::account::ListStudents, self).await
    }

    pub async fn update_student(
        &self,
        student_id: u64,
        patch: &StudentPatch,
    ) -> Result<StudentProfile, Error> {
        raw::call(
            raw::account::UpdateStudent { student_id, patch },
            self,
        )
        .await
    }

    pub async fn delete_student(&self, student_id: u64) -> Result<(), Error> {
        raw::call(raw::account::DeleteStudent { student_id }, self).await
    }
}
