//! Shared load/error/data shape for screens backed by one remote fetch,
//! replacing the per-screen loading/error boilerplate.

use crate::Error;

/// Lifecycle of a remotely fetched value.
#[derive(Debug, Clone, PartialEq)]
pub enum Remote<T> {
    Idle,
    Loading,
    Ready(T),
    /// User-facing failure message.
    Failed(String),
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Remote::Idle
    }
}

/// A [`Remote`] plus an epoch counter guarding against stale writes: a
/// fetch that resolves after the screen moved on (unmount, refetch) is
/// discarded instead of clobbering newer state.
#[derive(Debug)]
pub struct Resource<T> {
    state: Remote<T>,
    epoch: u64,
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Resource<T> {
    pub fn new() -> Self {
        Self {
            state: Remote::Idle,
            epoch: 0,
        }
    }

    pub fn state(&self) -> &Remote<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, Remote::Loading)
    }

    pub fn get(&self) -> Option<&T> {
        match &self.state {
            Remote::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            Remote::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Start a fetch, invalidating any outstanding one. The returned
    /// epoch must be handed back to [`resolve`](Self::resolve).
    pub fn begin(&mut self) -> u64 {
        self.epoch += 1;
        self.state = Remote::Loading;
        self.epoch
    }

    /// Complete the fetch started at `epoch`. A stale epoch is ignored
    /// and `false` is returned; the live state is untouched.
    pub fn resolve(&mut self, epoch: u64, result: Result<T, Error>) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.state = match result {
            Ok(value) => Remote::Ready(value),
            Err(err) => Remote::Failed(err.to_string()),
        };
        true
    }

    /// Drop back to idle, invalidating outstanding fetches.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.state = Remote::Idle;
    }
}
