//! QA record data model.
//!
//! A [`QaRecord`] is one stored question/answer pair with the user it
//! belongs to and free-form loan metadata (amounts, rates, due dates).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::RecordError;

/// Free-form metadata attached to records and index matches.
pub type Metadata = HashMap<String, serde_json::Value>;

/// A stored question/answer record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaRecord {
    /// Stable record ID, `{category}_{user}` at ingestion time.
    pub id: String,

    /// Category the record was ingested under (e.g. "emi", "interest").
    #[serde(default)]
    pub category: String,

    /// User the record belongs to.
    pub user: String,

    /// The stored question text.
    pub question: String,

    /// The stored answer text.
    pub answer: String,

    /// Additional loan metadata.
    #[serde(default)]
    pub metadata: Metadata,

    /// When the record was ingested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl QaRecord {
    pub fn new(
        category: impl Into<String>,
        user: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        let category = category.into();
        let user = user.into();
        Self {
            id: format!("{}_{}", category, user),
            category,
            user,
            question: question.into(),
            answer: answer.into(),
            metadata: HashMap::new(),
            created_at: Some(chrono::Utc::now()),
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Build a record from an index match's echoed metadata.
    ///
    /// The required fields must be present as strings; a match missing any
    /// of them is rejected rather than trusted.
    pub fn from_metadata(id: impl Into<String>, metadata: &Metadata) -> Result<Self, RecordError> {
        let question = required_str(metadata, "question")?;
        let answer = required_str(metadata, "answer")?;
        let user = required_str(metadata, "user")?;
        let category = metadata
            .get("category")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();

        Ok(Self {
            id: id.into(),
            category,
            user,
            question,
            answer,
            metadata: metadata.clone(),
            created_at: None,
        })
    }

    /// Metadata mapping stored alongside this record's vector at ingestion.
    ///
    /// Carries the full record so index matches can be rebuilt without a
    /// store round-trip.
    pub fn index_metadata(&self) -> Metadata {
        let mut metadata = self.metadata.clone();
        metadata.insert("category".to_string(), self.category.clone().into());
        metadata.insert("user".to_string(), self.user.clone().into());
        metadata.insert("question".to_string(), self.question.clone().into());
        metadata.insert("answer".to_string(), self.answer.clone().into());
        metadata
    }
}

fn required_str(metadata: &Metadata, field: &'static str) -> Result<String, RecordError> {
    let value = metadata
        .get(field)
        .ok_or(RecordError::MissingField(field))?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| RecordError::InvalidField {
            field: field.to_string(),
            message: "expected a string".to_string(),
        })
}

#[cfg(test)]
#[path = "qa_tests.rs"]
mod tests;
