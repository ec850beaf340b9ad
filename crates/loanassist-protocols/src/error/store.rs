//! Keyword store errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error() {
        let err = StoreError::StorageError("disk full".to_string());
        let display = err.to_string();
        assert!(display.contains("Storage error"));
        assert!(display.contains("disk full"));
    }

    #[test]
    fn test_query_error() {
        let err = StoreError::QueryError("bad filter".to_string());
        assert!(err.to_string().contains("bad filter"));
    }

    #[test]
    fn test_all_variants_display() {
        let errors: Vec<StoreError> = vec![
            StoreError::StorageError("a".to_string()),
            StoreError::QueryError("b".to_string()),
            StoreError::SerializationError("c".to_string()),
            StoreError::ConnectionError("d".to_string()),
        ];

        for err in errors {
            assert!(!err.to_string().is_empty());
        }
    }
}
