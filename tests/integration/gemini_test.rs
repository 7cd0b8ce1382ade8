// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::llm_settings;
use newsposter::domain::services::llm_service::{LLMError, LLMServiceTrait};
use newsposter::infrastructure::llm::GeminiService;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT: &str = "/models/gemini-2.5-pro:generateContent";

#[tokio::test]
async fn gemini_sends_prompt_and_temperature() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("x-goog-api-key", "gemini-test"))
        .and(body_partial_json(json!({
            "contents": [{"role": "user", "parts": [{"text": "Write a post"}]}],
            "generationConfig": {"temperature": 0.5}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Paragraph one...\n\nCall to action."}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 20, "candidatesTokenCount": 8, "totalTokenCount": 28}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = GeminiService::new(&llm_settings(&server.uri())).unwrap();
    let generation = service.generate("Write a post", 0.5).await.unwrap();

    assert_eq!(generation.text, "Paragraph one...\n\nCall to action.");
    assert_eq!(generation.usage.prompt_tokens, 20);
    assert_eq!(generation.usage.completion_tokens, 8);
    assert_eq!(service.model(), "gemini-2.5-pro");
}

#[tokio::test]
async fn gemini_error_message_is_extracted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"code": 400, "message": "API key not valid. Please pass a valid API key.", "status": "INVALID_ARGUMENT"}
        })))
        .mount(&server)
        .await;

    let service = GeminiService::new(&llm_settings(&server.uri())).unwrap();
    let err = service.generate("Write a post", 0.7).await.unwrap_err();

    match err {
        LLMError::Api { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "API key not valid. Please pass a valid API key.");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn gemini_plain_error_body_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let service = GeminiService::new(&llm_settings(&server.uri())).unwrap();
    let err = service.generate("Write a post", 0.7).await.unwrap_err();

    assert!(err.to_string().contains("503"));
    assert!(err.to_string().contains("upstream unavailable"));
}

#[tokio::test]
async fn gemini_blocked_prompt_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        })))
        .mount(&server)
        .await;

    let service = GeminiService::new(&llm_settings(&server.uri())).unwrap();
    let err = service.generate("Write a post", 0.7).await.unwrap_err();
    assert!(matches!(err, LLMError::InvalidResponse(_)));
}
