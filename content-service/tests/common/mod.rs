#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use content_service::config::{
    ContentConfig, GoogleConfig, ModelConfig, ObservabilityConfig,
};
use content_service::services::providers::TextProvider;
use content_service::startup::Application;
use secrecy::Secret;
use service_core::config::Config as CoreConfig;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

pub const TEST_API_KEY: &str = "test-api-key";

pub fn test_config(api_base: &str, timeout_ms: Option<u64>) -> ContentConfig {
    ContentConfig {
        common: CoreConfig { port: 0 },
        models: ModelConfig {
            text_model: "gemini-2.0-flash".to_string(),
            api_base: api_base.to_string(),
            timeout_ms,
        },
        google: GoogleConfig {
            api_key: Secret::new(TEST_API_KEY.to_string()),
        },
        observability: ObservabilityConfig {
            log_level: "error".to_string(),
            otlp_endpoint: None,
        },
    }
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    /// Spawn the full application with the Gemini provider pointed at `api_base`.
    pub async fn spawn(config: ContentConfig) -> Self {
        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        Self::run(app).await
    }

    /// Spawn the full application around a custom provider.
    pub async fn spawn_with_provider(provider: Arc<dyn TextProvider>) -> Self {
        let app = Application::build_with_provider(test_config("http://unused.test", None), provider)
            .await
            .expect("Failed to build test application");
        Self::run(app).await
    }

    async fn run(app: Application) -> Self {
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        TestApp { address, port }
    }
}

/// Request captured by [`FakeGemini`].
#[derive(Debug, Clone)]
pub struct ReceivedCall {
    pub path: String,
    pub api_key: Option<String>,
    pub body: serde_json::Value,
}

struct FakeState {
    status: StatusCode,
    body: serde_json::Value,
    delay: Duration,
    calls: Mutex<Vec<ReceivedCall>>,
}

/// Local stand-in for the generative-language REST API.
pub struct FakeGemini {
    pub base_url: String,
    state: Arc<FakeState>,
}

impl FakeGemini {
    /// Answers every generateContent call with a single candidate holding `text`.
    pub async fn replying(text: &str) -> Self {
        Self::start(StatusCode::OK, candidate_body(text), Duration::ZERO).await
    }

    pub async fn failing(status: StatusCode, body: serde_json::Value) -> Self {
        Self::start(status, body, Duration::ZERO).await
    }

    pub async fn slow(text: &str, delay: Duration) -> Self {
        Self::start(StatusCode::OK, candidate_body(text), delay).await
    }

    async fn start(status: StatusCode, body: serde_json::Value, delay: Duration) -> Self {
        let state = Arc::new(FakeState {
            status,
            body,
            delay,
            calls: Mutex::new(Vec::new()),
        });

        let router = Router::new()
            .route(
                "/v1beta/models/:call",
                post(generate).get(describe_model),
            )
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake upstream");
        let port = listener.local_addr().unwrap().port();

        tokio::spawn(async move {
            axum::serve(listener, router).await.ok();
        });

        FakeGemini {
            base_url: format!("http://127.0.0.1:{}/v1beta", port),
            state,
        }
    }

    pub fn calls(&self) -> Vec<ReceivedCall> {
        self.state.calls.lock().unwrap().clone()
    }
}

fn candidate_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

async fn generate(
    State(state): State<Arc<FakeState>>,
    Path(call): Path<String>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    state.calls.lock().unwrap().push(ReceivedCall {
        path: call,
        api_key: headers
            .get("x-goog-api-key")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string()),
        body,
    });

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    (state.status, Json(state.body.clone()))
}

async fn describe_model(Path(call): Path<String>) -> impl IntoResponse {
    Json(serde_json::json!({ "name": format!("models/{}", call) }))
}
