//! Query API handlers.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use loanassist_fusion::ArmFailure;
use loanassist_protocols::{FuseError, Metadata, QueryRequest, RankedAnswer, Source};

use crate::state::AppState;

/// Request to answer a loan question.
#[derive(Debug, Deserialize)]
pub struct ApiQueryRequest {
    /// The question text.
    pub question: String,

    /// Optional user filter.
    pub user: Option<String>,
}

/// One fused answer on the wire, flat rather than wrapped in a
/// one-element match list.
#[derive(Debug, Serialize)]
pub struct ApiAnswer {
    pub question: String,
    pub answer: String,
    pub user: String,
    pub metadata: Metadata,
    pub similarity_score: f32,
    pub source: Source,
}

impl From<RankedAnswer> for ApiAnswer {
    fn from(answer: RankedAnswer) -> Self {
        Self {
            question: answer.question,
            answer: answer.answer,
            user: answer.user,
            metadata: answer.metadata,
            similarity_score: answer.score,
            source: answer.source,
        }
    }
}

/// Response from the query endpoint.
#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub results: Vec<ApiAnswer>,

    /// Retrieval arms that failed, when the degrade policy is active.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub degraded: Vec<ArmFailure>,

    /// Error message if the request failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueryResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            results: vec![],
            degraded: vec![],
            error: Some(message.into()),
        }
    }
}

/// Answer a loan question.
///
/// POST /query
pub async fn query(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ApiQueryRequest>,
) -> (StatusCode, Json<QueryResponse>) {
    info!("Query request: question={:?} user={:?}", req.question, req.user);

    let mut request = QueryRequest::new(req.question);
    if let Some(user) = req.user {
        request = request.with_user(user);
    }

    match state.fuser.fuse(&request).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(QueryResponse {
                results: outcome.answers.into_iter().map(Into::into).collect(),
                degraded: outcome.degraded,
                error: None,
            }),
        ),
        Err(FuseError::EmptyQuery) => (
            StatusCode::BAD_REQUEST,
            Json(QueryResponse::failure(FuseError::EmptyQuery.to_string())),
        ),
        Err(e) => {
            // Collaborator failures surface as a generic 500; the detail
            // stays in the server log.
            error!("Query failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(QueryResponse::failure("internal server error")),
            )
        }
    }
}

/// Health response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

/// Liveness message.
///
/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Loan assistant API is running".to_string(),
    })
}

/// Distinct users in the keyword store.
#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /users
pub async fn users(State(state): State<Arc<AppState>>) -> (StatusCode, Json<UsersResponse>) {
    match state.store.distinct_users().await {
        Ok(users) => (StatusCode::OK, Json(UsersResponse { users, error: None })),
        Err(e) => {
            error!("User listing failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(UsersResponse {
                    users: vec![],
                    error: Some("internal server error".to_string()),
                }),
            )
        }
    }
}

/// Distinct record categories.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /categories
pub async fn categories(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<CategoriesResponse>) {
    match state.store.distinct_categories().await {
        Ok(categories) => (
            StatusCode::OK,
            Json(CategoriesResponse {
                categories,
                error: None,
            }),
        ),
        Err(e) => {
            error!("Category listing failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(CategoriesResponse {
                    categories: vec![],
                    error: Some("internal server error".to_string()),
                }),
            )
        }
    }
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
