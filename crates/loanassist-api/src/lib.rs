//! # loanassist API
//!
//! HTTP front door for the loanassist retrieval service.
//!
//! Exposes the fused query endpoint plus the small lookup endpoints the
//! browser client uses to populate its filters:
//!
//! ```text
//! POST /query      - fuse both retrieval arms for a question
//! GET  /health     - liveness message
//! GET  /users      - distinct users in the keyword store
//! GET  /categories - distinct record categories
//! ```

pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

pub use handlers::{ApiAnswer, ApiQueryRequest, QueryResponse};
pub use routes::create_router;
pub use server::{ApiConfig, ApiServer};
pub use state::AppState;
