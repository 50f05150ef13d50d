//! Expense CLI - session and sync client for a remote expense tracker
//!
//! This library implements the client side of an expense-tracking service:
//! acquiring and persisting a bearer session, attaching it to every
//! protected request, dropping it when the server rejects it, and keeping a
//! local view of expenses and categories in step with the server.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path and settings management
//! - `error`: Error types per layer
//! - `models`: Wire data models (expenses, categories, sessions, etc.)
//! - `storage`: JSON file storage and the persisted session store
//! - `api`: The authorized request gateway and typed endpoints
//! - `session`: Login/registration flows and the route guard
//! - `dashboard`: Concurrent load and insert-after-confirm sync
//! - `app`: Routes, the router and the application context
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense::app::App;
//! use expense::config::{ExpensePaths, Settings};
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let app = App::bootstrap(paths, settings, None)?;
//!
//! let dashboard = expense::cli::enter_dashboard(&app)?;
//! dashboard.load().await?;
//! ```

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod session;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
