// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::search_settings;
use newsposter::domain::search::engine::{SearchEngine, SearchError};
use newsposter::domain::services::news_fetcher::NewsFetcher;
use newsposter::infrastructure::search::TavilySearchEngine;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn tavily_sends_query_and_parses_results() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_partial_json(json!({
            "api_key": "tvly-test",
            "query": "electric vehicles",
            "max_results": 3,
            "topic": "news"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": "electric vehicles",
            "results": [
                {"url": "https://a.example/1", "title": "A", "content": "first", "score": 0.91},
                {"url": "https://b.example/2", "title": "B", "content": "second", "score": 0.87,
                 "published_date": "Mon, 13 Oct 2025 08:00:00 GMT"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let engine = TavilySearchEngine::new(&search_settings(&server.uri())).unwrap();
    let results = engine.search("electric vehicles", 3).await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].url.as_deref(), Some("https://a.example/1"));
    assert_eq!(results[0].title, "A");
    assert_eq!(results[1].published_time.as_deref(), Some("Mon, 13 Oct 2025 08:00:00 GMT"));
    assert_eq!(engine.name(), "tavily");
}

#[tokio::test]
async fn tavily_malformed_records_are_skipped_by_fetcher() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [
                {"title": "missing url"},
                {"url": null},
                {"url": 7},
                {"url": "https://c.example/3"}
            ]
        })))
        .mount(&server)
        .await;

    let engine = Arc::new(TavilySearchEngine::new(&search_settings(&server.uri())).unwrap());
    let urls = NewsFetcher::new(engine).fetch("rust", 3).await.unwrap();

    assert_eq!(urls, vec!["https://c.example/3"]);
}

#[tokio::test]
async fn tavily_missing_results_field_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"query": "rust"})))
        .mount(&server)
        .await;

    let engine = TavilySearchEngine::new(&search_settings(&server.uri())).unwrap();
    let results = engine.search("rust", 3).await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn tavily_error_status_is_engine_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized: missing or invalid API key."))
        .mount(&server)
        .await;

    let engine = TavilySearchEngine::new(&search_settings(&server.uri())).unwrap();
    let err = engine.search("rust", 3).await.unwrap_err();

    match err {
        SearchError::EngineError(msg) => {
            assert!(msg.contains("401"));
            assert!(msg.contains("invalid API key"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn tavily_invalid_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let engine = TavilySearchEngine::new(&search_settings(&server.uri())).unwrap();
    let err = engine.search("rust", 3).await.unwrap_err();
    assert!(matches!(err, SearchError::InvalidResponse(_)));
}

#[tokio::test]
async fn tavily_slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"results": []}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut settings = search_settings(&server.uri());
    settings.timeout_secs = 1;
    let engine = TavilySearchEngine::new(&settings).unwrap();

    let err = engine.search("rust", 3).await.unwrap_err();
    assert!(matches!(err, SearchError::Timeout));
}
