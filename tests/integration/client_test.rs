// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{use_case, CountingLLM, CountingSearchEngine};
use newsposter::client::{ClientError, PostClient};
use newsposter::presentation::routes;
use serde_json::json;
use tokio::net::TcpListener;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn spawn_app(engine_urls: &[&str]) -> String {
    let app = routes::app(use_case(
        CountingSearchEngine::with_urls(engine_urls),
        CountingLLM::replying("Paragraph one...\n\nCall to action."),
    ));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn client_posts_topic_and_decodes_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate-post"))
        .and(body_json(json!({"topic": "electric vehicles"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "topic": "electric vehicles",
            "news_sources": ["https://a.example/1"],
            "linkedin_post": "Hello",
            "image_suggestion": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = PostClient::new(&server.uri()).unwrap();
    let post = client.get_post("electric vehicles").await.unwrap();

    assert_eq!(post.linkedin_post, "Hello");
    assert_eq!(post.news_sources, vec!["https://a.example/1"]);
    assert!(post.image_suggestion.is_none());
}

#[tokio::test]
async fn client_surfaces_error_detail_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate-post"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"detail": "No recent news found", "code": "not_found"})),
        )
        .mount(&server)
        .await;

    let client = PostClient::new(&server.uri()).unwrap();
    let err = client.get_post("nothing").await.unwrap_err();

    match err {
        ClientError::Api { status, detail } => {
            assert_eq!(status, 404);
            assert_eq!(detail, "No recent news found");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn client_keeps_non_json_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate-post"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = PostClient::new(&server.uri()).unwrap();
    let err = client.get_post("rust").await.unwrap_err();
    assert_eq!(err.to_string(), "Bad Gateway (HTTP 502)");
}

#[tokio::test]
async fn client_round_trips_through_real_server() {
    let base_url = spawn_app(&["https://a.example/1", "https://b.example/2"]).await;
    let client = PostClient::new(&base_url).unwrap();

    let post = client.get_post("electric vehicles").await.unwrap();
    assert_eq!(post.topic, "electric vehicles");
    assert_eq!(post.news_sources.len(), 2);
    assert_eq!(post.linkedin_post, "Paragraph one...\n\nCall to action.");

    let err = client.get_post("").await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 422, .. }));
}

#[test]
fn client_rejects_invalid_base_url() {
    assert!(matches!(
        PostClient::new("not a url"),
        Err(ClientError::InvalidUrl(_))
    ));
}
