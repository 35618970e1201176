//! Headless client library for the UACT community-service tracker.
//!
//! All business state lives on the backend; this crate is the workflow
//! layer a frontend drives: session handling, catalog and student CRUD,
//! application submission, submission review and accreditation
//! settlement, plus the pure helpers that keep already-loaded lists
//! consistent with completed actions.

pub mod config;
pub mod programs;
pub mod raw;
pub mod relay;
pub mod resource;
pub mod review;
pub mod session;
pub mod settlement;
pub mod students;
pub mod submit;

#[cfg(test)]
mod tests;

pub use uact_shared as shared;

use std::time::Duration;

/// Everything an operation needs: the HTTP client, the backend base url
/// and the session store. Injected explicitly instead of living in a
/// global, so tests can construct one per mock backend.
pub struct Context {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub session: session::SessionStore,
}

impl Context {
    pub fn new(config: config::Config) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            http,
            base_url: config.api.base_url.trim_end_matches('/').to_owned(),
            session: session::SessionStore::open(&config.storage.data_dir)?,
        })
    }
}

/// Client-side error taxonomy. Every operation catches failures at its
/// boundary and returns one of these; nothing panics a caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing token, or the backend answered 401.
    #[error("{0}")]
    Auth(String),
    /// Role mismatch; the backend answered 403.
    #[error("access denied: {0}")]
    Forbidden(String),
    /// Rejected input, either before the call or as a 400 with field
    /// messages.
    #[error("{0}")]
    Validation(String),
    /// The action raced server-side state, e.g. deciding an
    /// already-decided submission. Recoverable: surface and refresh.
    #[error("{0}")]
    Conflict(String),
    /// Any other non-success response.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("session storage error: {0}")]
    Storage(#[from] std::io::Error),
}

impl Error {
    /// Not-logged-in short circuit, raised before any network call when
    /// an authenticated operation finds no stored token.
    pub(crate) fn not_logged_in() -> Self {
        Error::Auth("not logged in".to_string())
    }

    /// Whether re-authenticating is the remedy.
    pub fn requires_login(&self) -> bool {
        matches!(self, Error::Auth(_))
    }
}
