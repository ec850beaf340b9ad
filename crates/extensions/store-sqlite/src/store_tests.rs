use super::*;

async fn seeded_store() -> SqliteKeywordStore {
    let store = SqliteKeywordStore::new().await.unwrap();

    let mut emi_metadata = Metadata::new();
    emi_metadata.insert("emi_amount".to_string(), "12500".into());
    emi_metadata.insert("due_date".to_string(), "5th of every month".into());

    let records = vec![
        QaRecord::new("emi", "Karthik", "How much EMI does Karthik pay", "12,500 per month")
            .with_metadata(emi_metadata),
        QaRecord::new("emi", "Shay", "shay's emi", "9,800 per month"),
        QaRecord::new(
            "interest",
            "Venkat",
            "What is Venkat's interest rate",
            "8.5% effective",
        ),
    ];
    for record in &records {
        store.insert(record).await.unwrap();
    }
    store
}

fn filter(tokens: &[&str]) -> KeywordFilter {
    KeywordFilter::new(tokens.iter().map(|t| t.to_string()).collect())
}

#[tokio::test]
async fn test_find_single_token() {
    let store = seeded_store().await;

    let found = store.find(&filter(&["emi"])).await.unwrap();
    assert_eq!(found.len(), 2);
}

#[tokio::test]
async fn test_find_is_case_insensitive() {
    let store = seeded_store().await;

    // Stored question says "EMI"; the token is lowercased.
    let found = store.find(&filter(&["emi"])).await.unwrap();
    assert!(found
        .iter()
        .any(|r| r.question == "How much EMI does Karthik pay"));
}

#[tokio::test]
async fn test_find_tokens_are_disjunctive() {
    let store = seeded_store().await;

    let found = store.find(&filter(&["emi", "interest"])).await.unwrap();
    assert_eq!(found.len(), 3);
}

#[tokio::test]
async fn test_find_user_predicate_is_conjunctive() {
    let store = seeded_store().await;

    let found = store
        .find(&filter(&["emi", "interest"]).with_user("Shay"))
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].user, "Shay");
}

#[tokio::test]
async fn test_find_empty_tokens_returns_nothing() {
    let store = seeded_store().await;

    let found = store.find(&filter(&[])).await.unwrap();
    assert!(found.is_empty());

    // Even with a user predicate: no tokens, no matches.
    let found = store.find(&filter(&[]).with_user("Karthik")).await.unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn test_find_respects_limit() {
    let store = SqliteKeywordStore::new().await.unwrap();
    for i in 0..20 {
        let record = QaRecord::new("emi", format!("user{}", i), format!("emi question {}", i), "a");
        store.insert(&record).await.unwrap();
    }

    let found = store.find(&filter(&["emi"]).with_limit(10)).await.unwrap();
    assert_eq!(found.len(), 10);
}

#[tokio::test]
async fn test_metadata_round_trip() {
    let store = seeded_store().await;

    let found = store.find(&filter(&["karthik"])).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].metadata["emi_amount"], "12500");
    assert!(found[0].created_at.is_some());
}

#[tokio::test]
async fn test_insert_overwrites_by_id() {
    let store = seeded_store().await;

    let updated = QaRecord::new("emi", "Shay", "shay's emi", "10,200 per month");
    store.insert(&updated).await.unwrap();

    assert_eq!(store.count().await.unwrap(), 3);
    let found = store.find(&filter(&["shay's"])).await.unwrap();
    assert_eq!(found[0].answer, "10,200 per month");
}

#[tokio::test]
async fn test_distinct_users_sorted() {
    let store = seeded_store().await;

    let users = store.distinct_users().await.unwrap();
    assert_eq!(users, vec!["Karthik", "Shay", "Venkat"]);
}

#[tokio::test]
async fn test_distinct_categories() {
    let store = seeded_store().await;

    let categories = store.distinct_categories().await.unwrap();
    assert_eq!(categories, vec!["emi", "interest"]);
}

#[tokio::test]
async fn test_all_dumps_records() {
    let store = seeded_store().await;

    let records = store.all(100).await.unwrap();
    assert_eq!(records.len(), 3);

    let records = store.all(2).await.unwrap();
    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn test_file_backed_store_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.db");

    {
        let store = SqliteKeywordStore::with_path(&path).await.unwrap();
        store
            .insert(&QaRecord::new("emi", "Karthik", "q", "a"))
            .await
            .unwrap();
    }

    let store = SqliteKeywordStore::with_path(&path).await.unwrap();
    assert_eq!(store.count().await.unwrap(), 1);
}
