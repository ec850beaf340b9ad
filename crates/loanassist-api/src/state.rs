//! Shared application state.

use std::sync::Arc;

use loanassist_fusion::Fuser;
use loanassist_protocols::KeywordStore;

/// State shared across request handlers.
///
/// Collaborator handles are long-lived and shared read-only; no request
/// mutates them.
pub struct AppState {
    pub fuser: Arc<Fuser>,
    pub store: Arc<dyn KeywordStore>,
}

impl AppState {
    pub fn new(fuser: Arc<Fuser>, store: Arc<dyn KeywordStore>) -> Self {
        Self { fuser, store }
    }
}
