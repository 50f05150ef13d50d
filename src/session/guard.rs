//! Route guard for the protected view
//!
//! The decision is a pure function of whether a session is held at the
//! instant of navigation. It is never cached and never checks the token with
//! the server; the first authorized call does that.

use crate::app::Route;
use crate::storage::TokenStore;

/// Outcome of a guard check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(Route),
}

/// Decide whether the protected view may render
pub fn decide(has_session: bool) -> GuardDecision {
    if has_session {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(Route::Login)
    }
}

/// Evaluate the guard against the store's current value
pub fn check(tokens: &TokenStore) -> GuardDecision {
    decide(tokens.has_session())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Session;
    use tempfile::TempDir;

    #[test]
    fn test_decide() {
        assert_eq!(decide(true), GuardDecision::Allow);
        assert_eq!(decide(false), GuardDecision::Redirect(Route::Login));
    }

    #[test]
    fn test_check_reads_store_every_time() {
        let temp_dir = TempDir::new().unwrap();
        let tokens = TokenStore::open(temp_dir.path().join("session.json")).unwrap();

        assert_eq!(check(&tokens), GuardDecision::Redirect(Route::Login));

        tokens.set(Session::new("T")).unwrap();
        assert_eq!(check(&tokens), GuardDecision::Allow);

        tokens.clear().unwrap();
        assert_eq!(check(&tokens), GuardDecision::Redirect(Route::Login));
    }
}
