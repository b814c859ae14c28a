//! Gemini provider and full service runs against a local fake of the
//! generative-language API.

mod common;

use axum::http::StatusCode;
use common::{test_config, FakeGemini, TestApp, TEST_API_KEY};
use content_service::services::providers::{
    GeminiConfig, GeminiTextProvider, ProviderError, TextProvider,
};
use secrecy::Secret;
use serde_json::json;
use std::time::Duration;

fn provider_for(fake: &FakeGemini, timeout: Option<Duration>) -> GeminiTextProvider {
    GeminiTextProvider::new(GeminiConfig {
        api_key: Secret::new(TEST_API_KEY.to_string()),
        model: "gemini-2.0-flash".to_string(),
        api_base: fake.base_url.clone(),
        timeout,
    })
    .expect("Failed to build provider")
}

#[tokio::test]
async fn sends_single_authenticated_request() {
    let fake = FakeGemini::replying("<h1>Peru</h1>").await;
    let provider = provider_for(&fake, None);

    let text = provider.generate("escreva sobre o Peru").await.unwrap();

    assert_eq!(text, "<h1>Peru</h1>");
    let calls = fake.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].path, "gemini-2.0-flash:generateContent");
    assert_eq!(calls[0].api_key.as_deref(), Some(TEST_API_KEY));
    assert_eq!(
        calls[0].body,
        json!({ "contents": [{ "role": "user", "parts": [{ "text": "escreva sobre o Peru" }] }] })
    );
}

#[tokio::test]
async fn upstream_error_status_is_api_error() {
    let fake = FakeGemini::failing(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": { "message": "backend exploded" } }),
    )
    .await;

    let err = provider_for(&fake, None).generate("x").await.unwrap_err();

    match err {
        ProviderError::ApiError(message) => {
            assert!(message.contains("500"));
            assert!(message.contains("backend exploded"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(fake.calls().len(), 1, "no retries");
}

#[tokio::test]
async fn too_many_requests_is_rate_limited() {
    let fake = FakeGemini::failing(StatusCode::TOO_MANY_REQUESTS, json!({})).await;

    let err = provider_for(&fake, None).generate("x").await.unwrap_err();

    assert!(matches!(err, ProviderError::RateLimited));
    assert_eq!(fake.calls().len(), 1);
}

#[tokio::test]
async fn configured_timeout_aborts_the_call() {
    let fake = FakeGemini::slow("<h1>tarde</h1>", Duration::from_millis(1_000)).await;

    let err = provider_for(&fake, Some(Duration::from_millis(100)))
        .generate("x")
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Timeout(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_upstream_is_network_error() {
    let provider = GeminiTextProvider::new(GeminiConfig {
        api_key: Secret::new(TEST_API_KEY.to_string()),
        model: "gemini-2.0-flash".to_string(),
        api_base: "http://127.0.0.1:1/v1beta".to_string(),
        timeout: Some(Duration::from_secs(5)),
    })
    .unwrap();

    let err = provider.generate("x").await.unwrap_err();

    assert!(matches!(err, ProviderError::NetworkError(_)), "got {err:?}");
}

#[tokio::test]
async fn service_returns_stripped_model_output() {
    let fake = FakeGemini::replying("```html\n<h1>Brazil</h1>\n```").await;
    let app = TestApp::spawn(test_config(&fake.base_url, Some(5_000))).await;

    let response = reqwest::Client::new()
        .post(format!("{}/conteudo", app.address))
        .json(&json!({ "pais": "Brazil", "assunto": "carnaval" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.text().await.unwrap(), "<h1>Brazil</h1>");

    let calls = fake.calls();
    assert_eq!(calls.len(), 1);
    let prompt = calls[0].body["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap();
    assert!(prompt.contains("Brazil"));
    assert!(prompt.contains("carnaval"));
}

#[tokio::test]
async fn service_maps_upstream_failure_to_500() {
    let fake = FakeGemini::failing(
        StatusCode::BAD_REQUEST,
        json!({ "error": { "message": "API key not valid" } }),
    )
    .await;
    let app = TestApp::spawn(test_config(&fake.base_url, None)).await;

    let response = reqwest::Client::new()
        .post(format!("{}/conteudo", app.address))
        .json(&json!({ "pais": "Brazil", "assunto": "carnaval" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("API key not valid"));
}

#[tokio::test]
async fn service_rejects_empty_request_without_calling_upstream() {
    let fake = FakeGemini::replying("<h1>x</h1>").await;
    let app = TestApp::spawn(test_config(&fake.base_url, None)).await;

    let response = reqwest::Client::new()
        .post(format!("{}/conteudo", app.address))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "O campos são obrigatórios!." }));
    assert!(fake.calls().is_empty());
}

#[tokio::test]
async fn readiness_follows_upstream() {
    let fake = FakeGemini::replying("<h1>x</h1>").await;
    let app = TestApp::spawn(test_config(&fake.base_url, None)).await;

    let response = reqwest::Client::new()
        .get(format!("{}/ready", app.address))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn blank_api_key_fails_startup() {
    let mut config = test_config("http://unused.test", None);
    config.google.api_key = Secret::new(String::new());

    let result = content_service::startup::Application::build(config).await;

    assert!(result.is_err());
}
