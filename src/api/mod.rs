//! Remote API access
//!
//! [`Gateway`] wraps every outbound call; `endpoints` adds typed methods for
//! each route the client uses.

pub mod endpoints;
pub mod gateway;

pub use endpoints::{ExpenseListResponse, Pagination, TokenResponse};
pub use gateway::{ApiResponse, Gateway};
