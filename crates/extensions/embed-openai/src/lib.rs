//! OpenAI-compatible embedding backend for loanassist.
//!
//! Any service exposing the `/embeddings` wire shape works, including
//! self-hosted gateways in front of sentence-transformer models.

mod client;

pub use client::{OpenAiEmbedding, OpenAiEmbeddingConfig};
