use serde::{Deserialize, Serialize};

use super::Decision;

/// Payload for submitting an application to a program.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApplicationDescriptor {
    pub program_id: u64,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
}

impl ApplicationDescriptor {
    pub fn required_fields(&self) -> [(&'static str, &str); 2] {
        [
            ("emergency_contact_name", &self.emergency_contact_name),
            ("emergency_contact_phone", &self.emergency_contact_phone),
        ]
    }
}

/// Payload for the decide action endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct DecideDescriptor {
    pub decision: Decision,
}
