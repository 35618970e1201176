//! Cross-screen consistency relay.
//!
//! A detail/edit screen that completes a CRUD action parks the outcome
//! in a [`Relay`]; the list screen that originated the navigation takes
//! it exactly once on regaining focus and merges it into its in-memory
//! collection. No live subscription, last write wins.

use parking_lot::Mutex;
use uact_shared::account::StudentProfile;
use uact_shared::accreditation::AccreditationRecord;
use uact_shared::application::Submission;
use uact_shared::program::Program;

/// Records a relay can carry, keyed by their backend identifier.
pub trait Keyed {
    fn key(&self) -> u64;
}

impl Keyed for Program {
    fn key(&self) -> u64 {
        self.id
    }
}

impl Keyed for StudentProfile {
    fn key(&self) -> u64 {
        self.id
    }
}

impl Keyed for Submission {
    fn key(&self) -> u64 {
        self.id
    }
}

impl Keyed for AccreditationRecord {
    fn key(&self) -> u64 {
        self.id
    }
}

/// The outcome of a completed CRUD action.
#[derive(Debug, Clone, PartialEq)]
pub enum ListPatch<T> {
    Created(T),
    Updated(T),
    Deleted(u64),
}

/// A single-slot mailbox between an edit screen and its list screen.
pub struct Relay<T> {
    slot: Mutex<Option<ListPatch<T>>>,
}

impl<T> Default for Relay<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Relay<T> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Park a patch; a previous undelivered patch is overwritten.
    pub fn publish(&self, patch: ListPatch<T>) {
        *self.slot.lock() = Some(patch);
    }

    /// Take the parked patch, clearing the slot so a later focus event
    /// does not merge it twice. `None` when the user navigated back
    /// without completing an action.
    pub fn take(&self) -> Option<ListPatch<T>> {
        self.slot.lock().take()
    }
}

/// Merge a patch into a loaded list, keyed by record id.
///
/// Created records are prepended (newest first, as the list screens
/// display them) unless the id is already present, in which case the
/// merge degrades to a replace so a retried create cannot duplicate.
/// Replacement overwrites the whole record; no field-level merging.
pub fn merge<T: Keyed>(list: &mut Vec<T>, patch: ListPatch<T>) {
    match patch {
        ListPatch::Created(record) => {
            match list.iter().position(|e| e.key() == record.key()) {
                Some(pos) => list[pos] = record,
                None => list.insert(0, record),
            }
        }
        ListPatch::Updated(record) => {
            match list.iter().position(|e| e.key() == record.key()) {
                Some(pos) => list[pos] = record,
                None => list.push(record),
            }
        }
        ListPatch::Deleted(id) => list.retain(|e| e.key() != id),
    }
}
