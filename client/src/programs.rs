//! Program catalog access: read for every authenticated role, CRUD for
//! admins. Capacity enforcement is server-side; callers use
//! [`Program::is_full`] only to disable the apply affordance.

use uact_shared::program::handle::ProgramDescriptor;
use uact_shared::program::Program;

use crate::raw;
use crate::{Context, Error};

fn check_required(descriptor: &ProgramDescriptor) -> Result<(), Error> {
    for (field, value) in descriptor.required_fields() {
        if value.trim().is_empty() {
            return Err(Error::Validation(format!(
                "Please fill all required fields ({} is missing).",
                field
            )));
        }
    }
    Ok(())
}

impl Context {
    pub async fn programs(&self) -> Result<Vec<Program>, Error> {
        raw::call(raw::program::List, self).await
    }

    pub async fn create_program(&self, descriptor: &ProgramDescriptor) -> Result<Program, Error> {
        check_required(descriptor)?;
        raw::call(raw::program::Create { descriptor }, self).await
    }

    pub async fn update_program(
        &self,
        program_id: u64,
        descriptor: &ProgramDescriptor,
    ) -> Result<Program, Error> {
        check_required(descriptor)?;
        raw::call(
            raw::program::Update {
                program_id,
                descriptor,
            },
            self,
        )
        .await
    }

    pub async fn delete_program(&self, program_id: u64) -> Result<(), Error> {
        raw::call(raw::program::Delete { program_id }, self).await
    }
}
