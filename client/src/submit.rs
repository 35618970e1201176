//! Application submission: turns a student's intent-to-join into a
//! persisted application exactly once per user action.

use std::sync::atomic::{AtomicBool, Ordering};

use uact_shared::application::handle::ApplicationDescriptor;
use uact_shared::application::{Application, HistoryEntry};
use uact_shared::account::handle::ProgressSummary;
use uact_shared::program::Program;

use crate::raw;
use crate::{Context, Error};

/// Emergency-contact fields of the application form.
#[derive(Debug, Clone, Default)]
pub struct ApplicationForm {
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
}

/// One submission control. The in-flight flag is what a frontend binds
/// the disabled state of its submit button to.
#[derive(Default)]
pub struct Submitter {
    in_flight: AtomicBool,
}

impl Submitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submit an application for `program`.
    ///
    /// Returns `Ok(None)` without touching the network when another
    /// submit is still outstanding; the guard is released on every other
    /// exit path, success or failure, so the control becomes usable
    /// again. Validation and the missing-token check run before the
    /// request goes out.
    pub async fn submit(
        &self,
        cx: &Context,
        program: &Program,
        form: &ApplicationForm,
    ) -> Result<Option<Application>, Error> {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            return Ok(None);
        }
        let result = self.submit_inner(cx, program, form).await;
        self.in_flight.store(false, Ordering::Release);
        result.map(Some)
    }

    async fn submit_inner(
        &self,
        cx: &Context,
        program: &Program,
        form: &ApplicationForm,
    ) -> Result<Application, Error> {
        let descriptor = ApplicationDescriptor {
            program_id: program.id,
            emergency_contact_name: form.emergency_contact_name.clone(),
            emergency_contact_phone: form.emergency_contact_phone.clone(),
        };
        for (field, value) in descriptor.required_fields() {
            if value.trim().is_empty() {
                return Err(Error::Validation(format!(
                    "Please fill in all emergency contact fields ({} is missing).",
                    field.replace('_', " ")
                )));
            }
        }
        // The server capacity check is the backstop, not the only defense.
        if program.is_full() {
            return Err(Error::Validation(format!(
                "{} has no slots remaining.",
                program.name
            )));
        }
        if cx.session.token().is_none() {
            return Err(Error::not_logged_in());
        }

        raw::call(
            raw::application::Submit {
                descriptor: &descriptor,
            },
            cx,
        )
        .await
    }
}

impl Context {
    /// The student's own application records.
    pub async fn service_history(&self) -> Result<Vec<HistoryEntry>, Error> {
        raw::call(raw::application::ListHistory, self).await
    }

    /// The student's hour-progress summary.
    pub async fn progress(&self) -> Result<ProgressSummary, Error> {
        raw::call(raw::account::Progress, self).await
    }
}
