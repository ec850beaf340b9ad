use super::*;

use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

#[test]
fn test_config_defaults() {
    let config = OpenAiEmbeddingConfig::new("test-key");
    assert_eq!(config.api_key, "test-key");
    assert_eq!(config.model, "text-embedding-3-small");
    assert_eq!(config.dimension, 384);
}

#[test]
fn test_config_builder() {
    let config = OpenAiEmbeddingConfig::new("key")
        .with_model("BAAI/bge-small-en-v1.5")
        .with_dimension(768)
        .with_base_url("https://embeddings.internal/v1");

    assert_eq!(config.model, "BAAI/bge-small-en-v1.5");
    assert_eq!(config.dimension, 768);
    assert_eq!(config.base_url, "https://embeddings.internal/v1");
}

#[test]
fn test_provider_dimension() {
    let provider = OpenAiEmbedding::from_api_key("test-key");
    assert_eq!(provider.dimension(), 384);
}

#[tokio::test]
async fn test_embed_rejects_empty_text() {
    let provider = OpenAiEmbedding::from_api_key("test-key");
    let err = provider.embed("  ").await.unwrap_err();
    assert!(matches!(err, EmbedError::InvalidInput(_)));
}

#[tokio::test]
async fn test_embed_batch_empty_is_noop() {
    let provider = OpenAiEmbedding::from_api_key("test-key");
    let embeddings = provider.embed_batch(&[]).await.unwrap();
    assert!(embeddings.is_empty());
}

fn provider_for(server: &MockServer, dimension: usize) -> OpenAiEmbedding {
    OpenAiEmbedding::new(
        OpenAiEmbeddingConfig::new("test-key")
            .with_base_url(server.uri())
            .with_dimension(dimension),
    )
}

#[tokio::test]
async fn test_embed_success() {
    let mock_server = MockServer::start().await;

    let response_body = serde_json::json!({
        "object": "list",
        "data": [{
            "object": "embedding",
            "index": 0,
            "embedding": [0.1, 0.2, 0.3]
        }],
        "model": "text-embedding-3-small"
    });

    Mock::given(matchers::method("POST"))
        .and(matchers::path("/embeddings"))
        .and(matchers::header("Authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server, 3);
    let embedding = provider.embed("what is my emi").await.unwrap();
    assert_eq!(embedding.dimension, 3);
    assert_eq!(embedding.vector, vec![0.1, 0.2, 0.3]);
}

#[tokio::test]
async fn test_embed_api_error_carries_status() {
    let mock_server = MockServer::start().await;

    Mock::given(matchers::method("POST"))
        .and(matchers::path("/embeddings"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server, 3);
    let err = provider.embed("what is my emi").await.unwrap_err();
    match err {
        EmbedError::Api { status, message } => {
            assert_eq!(status, 401);
            assert!(message.contains("invalid api key"));
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_embed_wrong_dimension_rejected() {
    let mock_server = MockServer::start().await;

    let response_body = serde_json::json!({
        "data": [{ "embedding": [0.1, 0.2, 0.3] }]
    });

    Mock::given(matchers::method("POST"))
        .and(matchers::path("/embeddings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
        .mount(&mock_server)
        .await;

    // Configured for 768 but the model returns 3 values.
    let provider = provider_for(&mock_server, 768);
    let err = provider.embed("what is my emi").await.unwrap_err();
    assert!(err.to_string().contains("768"));
}

#[tokio::test]
async fn test_embed_batch_multiple_texts() {
    let mock_server = MockServer::start().await;

    let response_body = serde_json::json!({
        "data": [
            { "embedding": [1.0, 0.0] },
            { "embedding": [0.0, 1.0] }
        ]
    });

    Mock::given(matchers::method("POST"))
        .and(matchers::path("/embeddings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server, 2);
    let embeddings = provider
        .embed_batch(&["loan balance", "due date"])
        .await
        .unwrap();
    assert_eq!(embeddings.len(), 2);
}
