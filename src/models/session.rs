//! Session and credential types
//!
//! A [`Session`] is the opaque bearer credential issued by the API. Credentials
//! are only held long enough to obtain one and are wiped from memory on drop.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Opaque bearer credential proving an authenticated identity
///
/// `Debug` never prints the token itself.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Session(String);

impl Session {
    /// Wrap a raw token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Get the raw token
    pub fn token(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Session(<{} bytes redacted>)", self.0.len())
    }
}

/// Email and password pair used to log in
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    pub email: String,
    password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Profile fields submitted alongside credentials when registering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            first_name: "User".to_string(),
            last_name: "Test".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_debug_is_redacted() {
        let session = Session::new("secret-token");
        let debug = format!("{:?}", session);
        assert!(!debug.contains("secret-token"));
        assert_eq!(session.token(), "secret-token");
    }

    #[test]
    fn test_credentials_debug_is_redacted() {
        let creds = Credentials::new("u@x.com", "hunter22");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("u@x.com"));
        assert!(!debug.contains("hunter22"));
    }

    #[test]
    fn test_session_zeroize() {
        let mut session = Session::new("abc");
        session.zeroize();
        assert!(session.token().is_empty());
    }
}
