//! Storage layer for the expense client
//!
//! Local state is tiny: the persisted session entry. Expenses and categories
//! live on the server and are never cached on disk.

pub mod file_io;
pub mod token_store;

pub use file_io::{read_json, write_json_atomic};
pub use token_store::{TokenStore, SESSION_ENTRY};
