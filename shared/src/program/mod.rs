pub mod handle;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A community-service program as served by the catalog endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Program {
    /// The only id of this program.
    pub id: u64,
    pub name: String,
    pub description: String,
    pub location: String,
    pub facilitator: String,
    /// Scheduled date of the program.
    pub date: NaiveDate,
    pub time_start: NaiveTime,
    pub time_end: NaiveTime,
    /// Hours credited to a student on settlement.
    pub hours: u32,
    pub slots: u32,
    pub slots_taken: u32,
    /// Server-computed remaining capacity; older deployments omit it.
    #[serde(default)]
    pub slots_remaining: Option<u32>,
}

impl Program {
    /// Remaining capacity, preferring the server-supplied field.
    /// Never underflows below zero.
    pub fn slots_remaining(&self) -> u32 {
        self.slots_remaining
            .unwrap_or_else(|| self.slots.saturating_sub(self.slots_taken))
    }

    /// A full program does not accept new applications; the client only
    /// disables the affordance, the server is the backstop.
    pub fn is_full(&self) -> bool {
        self.slots_remaining() == 0
    }
}
