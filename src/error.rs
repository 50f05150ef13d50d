//! Custom error types for the expense client
//!
//! Each layer owns a small error enum (gateway, session, dashboard) and the
//! crate-wide [`ExpenseError`] wraps them so CLI handlers can use `?` freely.

use thiserror::Error;

/// Failure of a call made through the [`Gateway`](crate::api::Gateway)
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The server rejected the attached credential (HTTP 401)
    #[error("Session expired or was rejected by the server")]
    Unauthorized,

    /// Any other non-success response
    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    /// No response was received
    #[error("Could not reach the server: {0}")]
    Transport(String),

    /// A success response whose body did not match the expected shape
    #[error("Unexpected response from the server: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Check if this is an authorization rejection
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// HTTP status carried by the error, if a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::RequestFailed { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}

/// Login or registration failure
///
/// The messages are deliberately generic: a wrong password, an unknown
/// account and an unreachable server all read the same to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    Login,

    #[error("Registration failed")]
    Registration,
}

/// Failure of a dashboard operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    /// The session was rejected; the store has been cleared
    #[error("Your session has ended. Please log in again.")]
    Unauthorized,

    #[error("Could not load your expenses: {0}")]
    LoadFailed(String),

    #[error("Could not add the expense: {0}")]
    CreateFailed(String),

    #[error("An expense is already being added")]
    CreateInProgress,

    /// The view was torn down before the call settled
    #[error("The dashboard is no longer active")]
    Unmounted,
}

/// The main error type for expense client operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// The protected view was requested without a session
    #[error("You are not logged in. Run 'expense login' first.")]
    NotLoggedIn,

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Dashboard(#[from] DashboardError),
}

impl ExpenseError {
    /// Create a "not found" error for categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense client operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
