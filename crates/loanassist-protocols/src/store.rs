//! Keyword store protocol definitions.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::qa::QaRecord;

/// Default cap on keyword lookups.
pub const DEFAULT_KEYWORD_LIMIT: usize = 10;

/// A compiled keyword filter.
///
/// Tokens match the `question` field as case-insensitive substrings,
/// combined disjunctively; the user predicate, when present, is ANDed in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordFilter {
    /// Lowercased search tokens.
    pub tokens: Vec<String>,

    /// Exact-match user predicate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// Maximum number of records to return.
    pub limit: usize,
}

impl KeywordFilter {
    pub fn new(tokens: Vec<String>) -> Self {
        Self {
            tokens,
            user: None,
            limit: DEFAULT_KEYWORD_LIMIT,
        }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Core trait for keyword-filtered QA record stores.
///
/// Result order is store-defined; callers must cap and rank.
#[async_trait]
pub trait KeywordStore: Send + Sync {
    /// Find records matching the filter.
    async fn find(&self, filter: &KeywordFilter) -> Result<Vec<QaRecord>, StoreError>;

    /// Insert or overwrite a record.
    async fn insert(&self, record: &QaRecord) -> Result<(), StoreError>;

    /// All distinct users with stored records.
    async fn distinct_users(&self) -> Result<Vec<String>, StoreError>;

    /// All distinct record categories.
    async fn distinct_categories(&self) -> Result<Vec<String>, StoreError>;

    /// Total number of stored records.
    async fn count(&self) -> Result<usize, StoreError>;

    /// Dump stored records, up to `limit`.
    async fn all(&self, limit: usize) -> Result<Vec<QaRecord>, StoreError>;
}
