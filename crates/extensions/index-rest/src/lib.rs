//! REST vector index backend for loanassist.
//!
//! Speaks a Pinecone-style wire shape: a data plane for query/upsert/stats
//! and a control plane for index provisioning.

mod client;

pub use client::{IndexStats, RestIndexConfig, RestVectorIndex};
