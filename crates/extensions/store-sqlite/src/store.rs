//! SQLite keyword store implementation.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tokio_rusqlite::Connection;
use tracing::debug;

use loanassist_protocols::{KeywordFilter, KeywordStore, Metadata, QaRecord, StoreError};

/// SQLite-backed keyword store.
pub struct SqliteKeywordStore {
    conn: Arc<Connection>,
}

impl SqliteKeywordStore {
    /// Create a store with an in-memory database.
    pub async fn new() -> Result<Self, StoreError> {
        Self::with_path(":memory:").await
    }

    /// Create a store backed by a database file.
    pub async fn with_path(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path: PathBuf = path.into();
        let path_str = path.to_string_lossy().to_string();

        let conn = Connection::open(path_str)
            .await
            .map_err(|e| StoreError::ConnectionError(e.to_string()))?;

        conn.call(|conn| {
            conn.execute_batch(
                r#"
                CREATE TABLE IF NOT EXISTS questions (
                    id TEXT PRIMARY KEY,
                    category TEXT NOT NULL,
                    user TEXT NOT NULL,
                    question TEXT NOT NULL,
                    answer TEXT NOT NULL,
                    metadata TEXT NOT NULL DEFAULT '{}',
                    created_at TEXT
                );
                "#,
            )?;
            Ok(())
        })
        .await
        .map_err(|e| StoreError::StorageError(e.to_string()))?;

        Ok(Self {
            conn: Arc::new(conn),
        })
    }
}

const RECORD_COLUMNS: &str = "id, category, user, question, answer, metadata, created_at";

fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<QaRecord> {
    let metadata_json: String = row.get(5)?;
    let metadata: Metadata = serde_json::from_str(&metadata_json).unwrap_or_default();
    let created_at: Option<String> = row.get(6)?;

    Ok(QaRecord {
        id: row.get(0)?,
        category: row.get(1)?,
        user: row.get(2)?,
        question: row.get(3)?,
        answer: row.get(4)?,
        metadata,
        created_at: created_at
            .and_then(|s| chrono::DateTime::parse_from_rfc3339(&s).ok())
            .map(|dt| dt.with_timezone(&chrono::Utc)),
    })
}

#[async_trait]
impl KeywordStore for SqliteKeywordStore {
    async fn find(&self, filter: &KeywordFilter) -> Result<Vec<QaRecord>, StoreError> {
        if filter.tokens.is_empty() {
            // No tokens means nothing to search for, never match-all.
            return Ok(vec![]);
        }

        let mut sql = format!("SELECT {} FROM questions WHERE (", RECORD_COLUMNS);
        let predicates = vec!["instr(lower(question), ?) > 0"; filter.tokens.len()];
        sql.push_str(&predicates.join(" OR "));
        sql.push(')');
        if filter.user.is_some() {
            sql.push_str(" AND user = ?");
        }
        sql.push_str(&format!(" LIMIT {}", filter.limit));

        let mut params: Vec<String> = filter.tokens.iter().map(|t| t.to_lowercase()).collect();
        if let Some(user) = &filter.user {
            params.push(user.clone());
        }

        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&sql)?;
                let records: Vec<QaRecord> = stmt
                    .query_map(rusqlite::params_from_iter(params), row_to_record)?
                    .filter_map(|r| r.ok())
                    .collect();
                Ok(records)
            })
            .await
            .map_err(|e| StoreError::QueryError(format!("keyword search failed: {}", e)))
    }

    async fn insert(&self, record: &QaRecord) -> Result<(), StoreError> {
        let metadata_json = serde_json::to_string(&record.metadata)
            .map_err(|e| StoreError::SerializationError(e.to_string()))?;
        let record = record.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    "INSERT OR REPLACE INTO questions \
                     (id, category, user, question, answer, metadata, created_at) \
                     VALUES (?, ?, ?, ?, ?, ?, ?)",
                    rusqlite::params![
                        record.id,
                        record.category,
                        record.user,
                        record.question,
                        record.answer,
                        metadata_json,
                        record.created_at.map(|dt| dt.to_rfc3339()),
                    ],
                )?;
                Ok(())
            })
            .await
            .map_err(|e| StoreError::StorageError(e.to_string()))?;

        debug!("Stored QA record");
        Ok(())
    }

    async fn distinct_users(&self) -> Result<Vec<String>, StoreError> {
        self.conn
            .call(|conn| {
                let mut stmt =
                    conn.prepare("SELECT DISTINCT user FROM questions ORDER BY user")?;
                let users: Vec<String> = stmt
                    .query_map([], |row| row.get::<_, String>(0))?
                    .filter_map(|r| r.ok())
                    .collect();
                Ok(users)
            })
            .await
            .map_err(|e| StoreError::QueryError(e.to_string()))
    }

    async fn distinct_categories(&self) -> Result<Vec<String>, StoreError> {
        self.conn
            .call(|conn| {
                let mut stmt =
                    conn.prepare("SELECT DISTINCT category FROM questions ORDER BY category")?;
                let categories: Vec<String> = stmt
                    .query_map([], |row| row.get::<_, String>(0))?
                    .filter_map(|r| r.ok())
                    .collect();
                Ok(categories)
            })
            .await
            .map_err(|e| StoreError::QueryError(e.to_string()))
    }

    async fn count(&self) -> Result<usize, StoreError> {
        self.conn
            .call(|conn| {
                let count: i64 =
                    conn.query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))?;
                Ok(count as usize)
            })
            .await
            .map_err(|e| StoreError::QueryError(e.to_string()))
    }

    async fn all(&self, limit: usize) -> Result<Vec<QaRecord>, StoreError> {
        let sql = format!(
            "SELECT {} FROM questions ORDER BY id LIMIT {}",
            RECORD_COLUMNS, limit
        );
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&sql)?;
                let records: Vec<QaRecord> = stmt
                    .query_map([], row_to_record)?
                    .filter_map(|r| r.ok())
                    .collect();
                Ok(records)
            })
            .await
            .map_err(|e| StoreError::QueryError(e.to_string()))
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
