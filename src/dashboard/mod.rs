//! The protected expense view's data

pub mod sync;

pub use sync::{DashboardState, DashboardSync, CREATE_FAILED_MESSAGE, LOAD_FAILED_MESSAGE};
