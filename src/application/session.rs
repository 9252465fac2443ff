//! CLI session persistence.
//!
//! The signed-in session (bearer token + user) lives as a small JSON file
//! under the user config directory so separate CLI invocations share it.

use std::fs;
use std::path::PathBuf;

use crate::error::{ConfigError, Result};
use crate::port::outbound::auth::Session;

/// Loads and stores the session file.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store under the platform config dir, `paceline/session.json`.
    pub fn new() -> Result<Self> {
        let base = dirs::config_dir().ok_or(ConfigError::MissingField {
            field: "config directory",
        })?;
        Ok(Self {
            path: base.join("paceline").join("session.json"),
        })
    }

    /// Store at an explicit path. Used by tests.
    #[must_use]
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(session)?)?;
        Ok(())
    }

    /// The stored session, or `None` when signed out.
    pub fn load(&self) -> Result<Option<Session>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;
    use crate::port::outbound::auth::User;

    fn session() -> Session {
        Session {
            access_token: "jwt".into(),
            user: User {
                id: "c56a4180-65aa-42ec-a945-5fd21dec0538".parse::<UserId>().unwrap(),
                email: "runner@example.com".into(),
            },
        }
    }

    #[test]
    fn round_trips_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("session.json"));

        assert!(store.load().unwrap().is_none());
        store.save(&session()).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.access_token, "jwt");
        assert_eq!(loaded.user.email, "runner@example.com");

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at(dir.path().join("session.json"));
        store.clear().unwrap();
        store.clear().unwrap();
    }
}
