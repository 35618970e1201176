//! Session store: the only cross-screen shared resource. Read by every
//! authenticated operation, mutated only by login and logout.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uact_shared::account::handle::SignupDescriptor;
use uact_shared::account::Role;

use crate::raw;
use crate::{Context, Error};

const SESSION_FILE: &str = "session.toml";

/// An authenticated session: the opaque backend token plus the role
/// derived once at login.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub role: Role,
    pub username: String,
}

/// Holds the current session in memory and mirrors it to a toml file so
/// it survives restarts until explicit logout.
pub struct SessionStore {
    path: PathBuf,
    current: RwLock<Option<Session>>,
}

impl SessionStore {
    /// Open the store, restoring a persisted session if one exists.
    /// A file that fails to parse is treated as no session.
    pub fn open(data_dir: &Path) -> std::io::Result<Self> {
        fs::create_dir_all(data_dir)?;
        let path = data_dir.join(SESSION_FILE);
        let current = match fs::read_to_string(&path) {
            Ok(raw) => toml::from_str(&raw).ok(),
            Err(_) => None,
        };
        Ok(Self {
            path,
            current: RwLock::new(current),
        })
    }

    pub fn current(&self) -> Option<Session> {
        self.current.read().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.current.read().as_ref().map(|s| s.token.clone())
    }

    /// Role of the acting user; `Unknown` when no session is stored.
    pub fn role(&self) -> Role {
        self.current
            .read()
            .as_ref()
            .map(|s| s.role)
            .unwrap_or(Role::Unknown)
    }

    /// Persist and activate a session. The file is written before the
    /// in-memory slot so a storage failure leaves the old session
    /// untouched.
    fn store(&self, session: Session) -> Result<(), Error> {
        let raw = toml::to_string(&session)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
        fs::write(&self.path, raw)?;
        *self.current.write() = Some(session);
        Ok(())
    }

    /// Drop the session from memory and disk.
    fn clear(&self) -> Result<(), Error> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        *self.current.write() = None;
        Ok(())
    }
}

impl Context {
    /// Exchange credentials for a token and persist the session.
    ///
    /// Fail-closed: on any failure (network, rejected credentials, or a
    /// response carrying no recognizable role) the stored session is
    /// exactly what it was before the call.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Role, Error> {
        let result = raw::call(
            raw::account::Login {
                username: username.to_owned(),
                password: password.to_owned(),
            },
            self,
        )
        .await?;

        let role = Role::from_flags(result.is_admin, result.is_student);
        if role == Role::Unknown {
            return Err(Error::Auth("Unknown user role".to_string()));
        }

        self.session.store(Session {
            token: result.token,
            role,
            username: result.username,
        })?;
        tracing::info!(%username, ?role, "session opened");
        Ok(role)
    }

    /// Clear the persisted token and role flags, forcing a return to the
    /// unauthenticated entry screen.
    pub fn end_session(&self) -> Result<(), Error> {
        self.session.clear()?;
        tracing::info!("session closed");
        Ok(())
    }

    /// Create a student account. Required-field presence is checked
    /// before the network call; server-side serializer errors surface
    /// with their field messages.
    pub async fn sign_up(&self, descriptor: &SignupDescriptor) -> Result<String, Error> {
        for (field, value) in descriptor.required_fields() {
            if value.trim().is_empty() {
                return Err(Error::Validation(format!(
                    "Please fill in all required fields ({} is missing).",
                    field.replace('_', " ")
                )));
            }
        }
        let result = raw::call(raw::account::Signup { descriptor }, self).await?;
        Ok(result.username)
    }
}
