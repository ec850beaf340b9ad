//! SQLite keyword store backend for loanassist.
//!
//! Holds the structured QA records and serves the keyword arm's filtered
//! substring lookups.

mod store;

pub use store::SqliteKeywordStore;
