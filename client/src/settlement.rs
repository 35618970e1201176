//! Accreditation settlement: the final, irreversible crediting step.

use uact_shared::accreditation::AccreditationRecord;

use crate::raw;
use crate::{Context, Error};

impl Context {
    /// All accreditation records visible to the caller's role.
    pub async fn accreditation_records(&self) -> Result<Vec<AccreditationRecord>, Error> {
        raw::call(raw::accreditation::List, self).await
    }

    /// Credit the record's hours to the student.
    ///
    /// Refused locally unless `submission_accepted` is set and the record
    /// has not been approved yet, so a duplicate request is never
    /// initiated; the backend enforces at-most-once crediting as the
    /// backstop. The hours increment on the student profile is a backend
    /// side effect, not performed here.
    pub async fn approve_record(
        &self,
        record: &AccreditationRecord,
    ) -> Result<AccreditationRecord, Error> {
        if record.approved {
            return Err(Error::Conflict(format!(
                "record {} is already approved",
                record.id
            )));
        }
        if !record.submission_accepted {
            return Err(Error::Conflict(format!(
                "record {} has no accepted submission",
                record.id
            )));
        }

        raw::call(raw::accreditation::Approve { record_id: record.id }, self).await
    }
}
