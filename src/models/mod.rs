//! Core data models for the expense client
//!
//! Records as the API serves them (categories, expenses), the fields the
//! client submits, and the session credential types.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod serde_ext;
pub mod session;
pub mod summary;

pub use category::Category;
pub use expense::{Expense, ExpenseValidationError, NewExpense};
pub use ids::{CategoryId, ExpenseId, UserId};
pub use money::Money;
pub use session::{Credentials, Profile, Session};
pub use summary::{AnalyticsSummary, CategorySummary, DailySummary, UserAccount};
