//! Integration tests for the REST list store using wiremock

use showcase_store::{ListStore, RestListStore, StoreError};

use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_range_sends_lrange_with_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_string_contains("LRANGE"))
        .and(body_string_contains("showcase:projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": [
                "{\"name\":\"Foo\",\"url\":\"http://x\",\"submittedBy\":\"Al\",\"tags\":[\"VIBES\"],\"timestamp\":1704067200000}"
            ]
        })))
        .mount(&mock_server)
        .await;

    let store = RestListStore::new(&mock_server.uri(), "test-token");
    let items = store.range("showcase:projects", 0, -1).await.unwrap();

    assert_eq!(items.len(), 1);
    assert!(items[0].is_string());
}

#[tokio::test]
async fn test_range_rejects_non_array_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": "OK" })))
        .mount(&mock_server)
        .await;

    let store = RestListStore::new(&mock_server.uri(), "test-token");
    let result = store.range("showcase:projects", 0, -1).await;

    assert!(matches!(result, Err(StoreError::Api { .. })));
}

#[tokio::test]
async fn test_push_head_sends_lpush() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string_contains("LPUSH"))
        .and(body_string_contains("{\\\"name\\\":\\\"Foo\\\"}"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": 1 })))
        .mount(&mock_server)
        .await;

    let store = RestListStore::new(&mock_server.uri(), "test-token");
    let result = store
        .push_head("showcase:projects", "{\"name\":\"Foo\"}")
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_set_at_sends_lset_with_index() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string_contains("LSET"))
        .and(body_string_contains("\"2\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": "OK" })))
        .mount(&mock_server)
        .await;

    let store = RestListStore::new(&mock_server.uri(), "test-token");
    let result = store.set_at("showcase:projects", 2, "tombstone").await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_remove_value_returns_removed_count() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string_contains("LREM"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": 1 })))
        .mount(&mock_server)
        .await;

    let store = RestListStore::new(&mock_server.uri(), "test-token");
    let removed = store
        .remove_value("showcase:projects", 1, "tombstone")
        .await
        .unwrap();

    assert_eq!(removed, 1);
}

#[tokio::test]
async fn test_error_envelope_becomes_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "ERR index out of range"
        })))
        .mount(&mock_server)
        .await;

    let store = RestListStore::new(&mock_server.uri(), "test-token");
    let result = store.set_at("showcase:projects", 99, "tombstone").await;

    let err = result.unwrap_err();
    assert!(err.to_string().contains("index out of range"));
}

#[tokio::test]
async fn test_trailing_slash_in_base_url_is_tolerated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": [] })))
        .mount(&mock_server)
        .await;

    let store = RestListStore::new(&format!("{}/", mock_server.uri()), "test-token");
    let items = store.range("showcase:projects", 0, -1).await.unwrap();

    assert!(items.is_empty());
}
