//! Login and registration flows
//!
//! [`SessionController`] submits credentials, stores the returned session
//! and tells the caller where to go next. Failures collapse into the generic
//! [`AuthError`]; the underlying reason is only logged.
//!
//! The `loading` flag is true while a call is in flight and is the only
//! guard against double submission. Callers disable input while it is set.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, warn};

use crate::api::Gateway;
use crate::app::Route;
use crate::error::{AuthError, ExpenseResult};
use crate::models::{Credentials, Profile};

/// Drives login, registration and logout
#[derive(Debug)]
pub struct SessionController {
    gateway: Gateway,
    loading: AtomicBool,
}

/// Sets the flag for its lifetime, so it settles even if the call is dropped
struct Loading<'a>(&'a AtomicBool);

impl<'a> Loading<'a> {
    fn start(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for Loading<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl SessionController {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            gateway,
            loading: AtomicBool::new(false),
        }
    }

    /// Whether a login or registration is in flight
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Log in and store the session
    ///
    /// On success the caller should proceed to the dashboard.
    pub async fn login(&self, credentials: &Credentials) -> Result<Route, AuthError> {
        let _loading = Loading::start(&self.loading);

        let session = self.gateway.login(credentials).await.map_err(|e| {
            debug!(error = %e, "login rejected");
            AuthError::Login
        })?;

        self.gateway.tokens().set(session).map_err(|e| {
            warn!(error = %e, "could not store session");
            AuthError::Login
        })?;

        Ok(Route::Dashboard)
    }

    /// Create an account
    ///
    /// Does not log in: on success the caller should proceed to login.
    pub async fn register(
        &self,
        credentials: &Credentials,
        profile: &Profile,
    ) -> Result<Route, AuthError> {
        let _loading = Loading::start(&self.loading);

        self.gateway
            .register(credentials, profile)
            .await
            .map_err(|e| {
                debug!(error = %e, "registration rejected");
                AuthError::Registration
            })?;

        Ok(Route::Login)
    }

    /// Forget the current session
    pub fn logout(&self) -> ExpenseResult<Route> {
        self.gateway.tokens().clear()?;
        Ok(Route::Login)
    }
}
