//! QA record validation errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Record missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid value for {field}: {message}")]
    InvalidField { field: String, message: String },
}
