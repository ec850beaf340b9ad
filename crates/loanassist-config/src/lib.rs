//! # loanassist Config
//!
//! Configuration management for the loanassist retrieval service.
//!
//! Configuration is loaded once at process start into an explicit [`Config`]
//! object and passed by reference into collaborator constructors; nothing in
//! the core logic reads process-wide mutable state.

mod error;
mod loader;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
