//! Navigable routes and the in-process router
//!
//! Every navigation to the protected route runs the guard against the
//! session held at that instant. Navigating to the route that is already
//! current is a no-op, so several failures reporting "go to login" at once
//! produce a single transition.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use crate::session::guard::{self, GuardDecision};
use crate::storage::TokenStore;

/// A navigable entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    /// The protected expense view
    Dashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/",
        }
    }

    /// Whether the guard must allow this route before it renders
    pub fn is_protected(&self) -> bool {
        matches!(self, Self::Dashboard)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Tracks the current route; clones share state
#[derive(Debug, Clone)]
pub struct Router {
    tokens: TokenStore,
    state: Arc<Mutex<RouterState>>,
}

#[derive(Debug, Default)]
struct RouterState {
    current: Option<Route>,
    history: Vec<Route>,
}

impl Router {
    /// Create a router with nothing rendered yet
    pub fn new(tokens: TokenStore) -> Self {
        Self {
            tokens,
            state: Arc::new(Mutex::new(RouterState::default())),
        }
    }

    /// Navigate to `target`, returning the route actually landed on
    pub fn navigate(&self, target: Route) -> Route {
        let landed = if target.is_protected() {
            match guard::check(&self.tokens) {
                GuardDecision::Allow => target,
                GuardDecision::Redirect(to) => {
                    debug!(from = %target, to = %to, "guard redirected");
                    to
                }
            }
        } else {
            target
        };

        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.current != Some(landed) {
            state.current = Some(landed);
            state.history.push(landed);
            debug!(route = %landed, "navigated");
        }
        landed
    }

    /// The route currently rendered
    pub fn current(&self) -> Option<Route> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .current
    }

    /// Every transition so far, oldest first
    pub fn history(&self) -> Vec<Route> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .history
            .clone()
    }
}
