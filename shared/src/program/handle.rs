use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Create/update payload for a program. Capacity bookkeeping
/// (`slots_taken`, `slots_remaining`) is server-owned and absent here.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProgramDescriptor {
    pub name: String,
    pub description: String,
    pub location: String,
    pub facilitator: String,
    pub date: NaiveDate,
    pub time_start: NaiveTime,
    pub time_end: NaiveTime,
    pub hours: u32,
    pub slots: u32,
}

impl ProgramDescriptor {
    /// Fields the program form marks as required.
    pub fn required_fields(&self) -> [(&'static str, &str); 2] {
        [("name", &self.name), ("description", &self.description)]
    }
}
