use super::*;

use async_trait::async_trait;
use loanassist_fusion::{Fuser, FuserConfig};
use loanassist_protocols::{
    EmbeddingProvider, HashEmbedding, IndexError, KeywordFilter, KeywordStore, QaRecord,
    ScoredMatch, StoreError, VectorIndex, VectorRecord,
};

struct StubIndex {
    matches: Vec<ScoredMatch>,
}

#[async_trait]
impl VectorIndex for StubIndex {
    async fn query(
        &self,
        _vector: &[f32],
        top_k: usize,
        _include_metadata: bool,
    ) -> Result<Vec<ScoredMatch>, IndexError> {
        let mut matches = self.matches.clone();
        matches.truncate(top_k);
        Ok(matches)
    }

    async fn upsert(&self, _records: Vec<VectorRecord>) -> Result<(), IndexError> {
        Ok(())
    }

    fn dimension(&self) -> usize {
        384
    }
}

struct StubStore {
    records: Vec<QaRecord>,
    fail: bool,
}

#[async_trait]
impl KeywordStore for StubStore {
    async fn find(&self, filter: &KeywordFilter) -> Result<Vec<QaRecord>, StoreError> {
        if self.fail {
            return Err(StoreError::ConnectionError("store down".to_string()));
        }
        Ok(self
            .records
            .iter()
            .filter(|r| {
                let question = r.question.to_lowercase();
                filter.tokens.iter().any(|t| question.contains(t))
            })
            .cloned()
            .collect())
    }

    async fn insert(&self, _record: &QaRecord) -> Result<(), StoreError> {
        Ok(())
    }

    async fn distinct_users(&self) -> Result<Vec<String>, StoreError> {
        if self.fail {
            return Err(StoreError::ConnectionError("store down".to_string()));
        }
        Ok(vec!["Karthik".to_string(), "Shay".to_string()])
    }

    async fn distinct_categories(&self) -> Result<Vec<String>, StoreError> {
        Ok(vec!["emi".to_string()])
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.records.len())
    }

    async fn all(&self, limit: usize) -> Result<Vec<QaRecord>, StoreError> {
        let mut records = self.records.clone();
        records.truncate(limit);
        Ok(records)
    }
}

fn test_state(store_fail: bool) -> Arc<AppState> {
    let records = vec![QaRecord::new(
        "emi",
        "Karthik",
        "How much EMI does Karthik pay",
        "12,500 per month",
    )];
    let matches = vec![ScoredMatch {
        id: records[0].id.clone(),
        score: 0.9,
        metadata: Some(records[0].index_metadata()),
    }];

    let embedder: Arc<dyn EmbeddingProvider> = Arc::new(HashEmbedding::new(384));
    let index: Arc<dyn VectorIndex> = Arc::new(StubIndex { matches });
    let store = Arc::new(StubStore {
        records,
        fail: store_fail,
    });

    let fuser = Arc::new(Fuser::new(
        embedder,
        index,
        store.clone(),
        FuserConfig::default(),
    ));
    Arc::new(AppState::new(fuser, store))
}

#[tokio::test]
async fn test_query_returns_ranked_results() {
    let state = test_state(false);

    let (status, Json(response)) = query(
        State(state),
        Json(ApiQueryRequest {
            question: "how much emi does karthik pay".to_string(),
            user: None,
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(response.error.is_none());
    assert!(!response.results.is_empty());
    assert_eq!(response.results[0].source, Source::Vector);
}

#[tokio::test]
async fn test_query_empty_question_is_bad_request() {
    let state = test_state(false);

    let (status, Json(response)) = query(
        State(state),
        Json(ApiQueryRequest {
            question: "   ".to_string(),
            user: None,
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response.error.unwrap().contains("empty"));
}

#[tokio::test]
async fn test_query_collaborator_failure_is_generic_500() {
    let state = test_state(true);

    let (status, Json(response)) = query(
        State(state),
        Json(ApiQueryRequest {
            question: "how much emi".to_string(),
            user: None,
        }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    // The real failure stays in the log.
    assert_eq!(response.error.as_deref(), Some("internal server error"));
}

#[tokio::test]
async fn test_health() {
    let Json(response) = health().await;
    assert_eq!(response.status, "ok");
}

#[tokio::test]
async fn test_users_listing() {
    let state = test_state(false);

    let (status, Json(response)) = users(State(state)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response.users, vec!["Karthik", "Shay"]);
}

#[tokio::test]
async fn test_users_failure_is_500() {
    let state = test_state(true);

    let (status, Json(response)) = users(State(state)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.users.is_empty());
}

#[tokio::test]
async fn test_categories_listing() {
    let state = test_state(false);

    let (status, Json(response)) = categories(State(state)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response.categories, vec!["emi"]);
}

#[test]
fn test_api_query_request_deserialize() {
    let json = r#"{"question": "what is my emi", "user": "Karthik"}"#;
    let req: ApiQueryRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.question, "what is my emi");
    assert_eq!(req.user, Some("Karthik".to_string()));
}

#[test]
fn test_query_response_serialize_skips_empty_fields() {
    let response = QueryResponse {
        results: vec![],
        degraded: vec![],
        error: None,
    };
    let json = serde_json::to_string(&response).unwrap();
    assert!(!json.contains("error"));
    assert!(!json.contains("degraded"));
}

#[test]
fn test_api_answer_from_ranked_answer() {
    let ranked = RankedAnswer {
        question: "q".to_string(),
        answer: "a".to_string(),
        user: "Shay".to_string(),
        metadata: Metadata::new(),
        score: 0.8,
        source: Source::Keyword,
    };
    let api: ApiAnswer = ranked.into();
    assert_eq!(api.similarity_score, 0.8);

    let json = serde_json::to_string(&api).unwrap();
    assert!(json.contains("similarity_score"));
    assert!(json.contains("keyword"));
}
