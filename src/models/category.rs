//! Category model
//!
//! Categories are owned by the remote store. The client only reads them:
//! they label expenses and seed the category choice when adding one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, UserId};
use super::serde_ext;

/// A spending category as served by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Display color (e.g. "#6B7280")
    #[serde(default)]
    pub color: Option<String>,

    /// Icon glyph or icon name
    #[serde(default)]
    pub icon: Option<String>,

    /// Owning user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,

    /// When the category was created
    #[serde(
        default,
        deserialize_with = "serde_ext::deserialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl Category {
    /// Create a category with only the required fields set
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: None,
            icon: None,
            user_id: None,
            created_at: None,
        }
    }

    /// Check whether `identifier` names this category, by ID or by
    /// case-insensitive name
    pub fn matches(&self, identifier: &str) -> bool {
        self.id.matches(identifier) || self.name.eq_ignore_ascii_case(identifier.trim())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.icon.as_deref() {
            Some(icon) if !icon.is_empty() => write!(f, "{} {}", icon, self.name),
            _ => write!(f, "{}", self.name),
        }
    }
}
