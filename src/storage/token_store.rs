//! Persisted holder of the current session credential
//!
//! The session lives under a single named entry of a small key-value JSON
//! file so it survives restarts. One `TokenStore` is opened per process and
//! cloned into every component that needs it; clones share state.
//!
//! Only the session controller (login, logout) and the gateway (on a 401)
//! write to the store. Everything else reads.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, warn};

use crate::error::ExpenseResult;
use crate::models::Session;

use super::file_io::{read_json, remove_if_exists, write_json_private};

/// Name of the entry holding the bearer credential
pub const SESSION_ENTRY: &str = "access_token";

type Entries = BTreeMap<String, String>;

/// Shared handle to the current session
#[derive(Debug, Clone)]
pub struct TokenStore {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    path: PathBuf,
    current: RwLock<Option<Session>>,
}

impl TokenStore {
    /// Open the store backed by `path`, loading any persisted session
    pub fn open(path: impl Into<PathBuf>) -> ExpenseResult<Self> {
        let path = path.into();
        let mut entries: Entries = read_json(&path)?;
        let current = entries
            .remove(SESSION_ENTRY)
            .filter(|token| !token.is_empty())
            .map(Session::new);

        debug!(path = %path.display(), present = current.is_some(), "opened token store");

        Ok(Self {
            inner: Arc::new(Inner {
                path,
                current: RwLock::new(current),
            }),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    /// The current session, if any
    pub fn get(&self) -> Option<Session> {
        self.inner
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether a session is held right now
    pub fn has_session(&self) -> bool {
        self.inner
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Replace the current session
    ///
    /// The new value is persisted before it becomes visible, so a failed
    /// write leaves the previous session in place.
    pub fn set(&self, session: Session) -> ExpenseResult<()> {
        let mut current = self
            .inner
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let mut entries: Entries = read_json(&self.inner.path).unwrap_or_default();
        entries.insert(SESSION_ENTRY.to_string(), session.token().to_string());
        write_json_private(&self.inner.path, &entries)?;

        *current = Some(session);
        debug!("session stored");
        Ok(())
    }

    /// Remove the current session, returning it
    ///
    /// The in-memory value is always cleared; an error only reports that the
    /// persisted entry could not be removed.
    pub fn clear(&self) -> ExpenseResult<Option<Session>> {
        let mut current = self
            .inner
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let previous = current.take();
        self.remove_entry()?;

        debug!(was_present = previous.is_some(), "session cleared");
        Ok(previous)
    }

    /// Clear the session after the server rejected `rejected`
    ///
    /// Nothing happens if the store no longer holds that credential, e.g.
    /// because a newer login replaced it while the request was in flight.
    /// Returns whether a session was removed.
    pub fn invalidate(&self, rejected: &Session) -> bool {
        let mut current = self
            .inner
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if current.as_ref() != Some(rejected) {
            return false;
        }
        *current = None;

        if let Err(e) = self.remove_entry() {
            warn!(error = %e, "session cleared in memory but not on disk");
        }
        debug!("session invalidated");
        true
    }

    fn remove_entry(&self) -> ExpenseResult<()> {
        let mut entries: Entries = read_json(&self.inner.path).unwrap_or_default();
        entries.remove(SESSION_ENTRY);

        if entries.is_empty() {
            remove_if_exists(&self.inner.path)
        } else {
            write_json_private(&self.inner.path, &entries)
        }
    }
}
