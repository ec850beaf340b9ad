//! Query request and ranked answer types.

use serde::{Deserialize, Serialize};

use crate::qa::Metadata;

/// A natural-language question with an optional user filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// The question text. Must be non-empty after trimming.
    pub text: String,

    /// Restrict results to records belonging to this user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

impl QueryRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            user: None,
        }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }
}

/// Which retrieval backend produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Vector,
    Keyword,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Vector => write!(f, "vector"),
            Source::Keyword => write!(f, "keyword"),
        }
    }
}

/// One of the two independent retrieval arms.
///
/// Used in diagnostics to name which arm failed or timed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arm {
    Vector,
    Keyword,
}

impl std::fmt::Display for Arm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Arm::Vector => write!(f, "vector"),
            Arm::Keyword => write!(f, "keyword"),
        }
    }
}

/// One fused, scored answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedAnswer {
    /// The matched record's question.
    pub question: String,

    /// The matched record's answer.
    pub answer: String,

    /// User the record belongs to.
    pub user: String,

    /// Loan metadata carried through from the matched record.
    #[serde(default)]
    pub metadata: Metadata,

    /// Normalized confidence in [0, 1]. Vector matches carry the cosine
    /// similarity; keyword matches carry the two-level heuristic score.
    pub score: f32,

    /// Which arm produced this answer.
    pub source: Source,
}
