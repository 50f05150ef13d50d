//! Display formatting for terminal output
//!
//! Plain string builders; callers decide where the text goes.

pub mod category;
pub mod expense;
pub mod summary;

pub use category::format_category_list;
pub use expense::{format_expense_details, format_expense_list, format_expense_row};
pub use summary::{format_summary, format_user};
