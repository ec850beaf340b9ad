//! # loanassist Protocols
//!
//! Collaborator contracts (traits) and the shared data model for the
//! loanassist retrieval service. Contains only interface definitions and
//! plain data types - no service implementations.
//!
//! ## Core Traits
//!
//! - [`EmbeddingProvider`] - Trait for text-to-vector embedding backends
//! - [`VectorIndex`] - Trait for nearest-neighbor index backends
//! - [`KeywordStore`] - Trait for keyword-filtered QA record stores

pub mod embedding;
pub mod error;
pub mod qa;
pub mod query;
pub mod store;
pub mod vector;

// Re-export core traits and types
pub use embedding::{Embedding, EmbeddingProvider, HashEmbedding};
pub use error::{EmbedError, FuseError, IndexError, RecordError, StoreError};
pub use qa::{Metadata, QaRecord};
pub use query::{Arm, QueryRequest, RankedAnswer, Source};
pub use store::{KeywordFilter, KeywordStore};
pub use vector::{ScoredMatch, VectorIndex, VectorRecord};
