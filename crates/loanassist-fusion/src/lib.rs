//! Retrieval fusion for loanassist.
//!
//! Combines keyword search over the QA store with semantic search over the
//! vector index and merges both into one ranked answer list.
//!
//! ## How It Works
//!
//! 1. The query is sent to both retrieval arms concurrently
//! 2. Scores are normalized into one comparable range
//! 3. Results are merged vector-first, deduplicated by question, sorted by
//!    score, and capped
//!
//! Merge order is part of the data contract: it is always vector-first,
//! regardless of which arm completes first.

mod fuser;
mod keywords;
mod merge;

pub use fuser::{ArmFailure, ArmFailurePolicy, FuseOutcome, Fuser, FuserConfig};
pub use keywords::query_tokens;
pub use merge::{keyword_confidence, merge_ranked};
