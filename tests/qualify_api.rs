//! Integration tests for the lead submission API.
//!
//! Spins up the real Axum router on an ephemeral port with a mock LLM
//! provider, then drives it over HTTP.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use lead_qualify::config::QualifierConfig;
use lead_qualify::error::LlmError;
use lead_qualify::llm::provider::{
    CompletionRequest, CompletionResponse, LlmProvider,
};
use lead_qualify::server::lead_routes;

/// Counts calls and replies with canned stage text; optionally fails every call.
struct MockProvider {
    calls: AtomicUsize,
    fail: bool,
}

impl MockProvider {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    async fn complete(&self, _request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let index = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(LlmError::RequestFailed {
                provider: "mock".to_string(),
                reason: "simulated outage".to_string(),
            });
        }
        Ok(CompletionResponse {
            content: format!("stage output {index}"),
            input_tokens: 10,
            output_tokens: 20,
        })
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}

/// Bind the router on an ephemeral port and return its base URL.
async fn spawn_server(provider: Arc<MockProvider>) -> String {
    let config = Arc::new(QualifierConfig::default());
    let app = lead_routes(provider, config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn health_endpoint_responds() {
    let base = spawn_server(Arc::new(MockProvider::new())).await;
    let response = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn email_lead_runs_four_stages_and_returns_result() {
    let provider = Arc::new(MockProvider::new());
    let base = spawn_server(provider.clone()).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/leads/email"))
        .json(&serde_json::json!({
            "sender_email": "john@acme.com",
            "subject": "Pricing",
            "content": "We need enterprise pricing for 500 seats"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();

    // Final output is non-empty text; the transcript covers all four stages.
    assert_eq!(body["result"], "stage output 3");
    assert_eq!(body["transcript"].as_array().unwrap().len(), 4);
    assert!(body["run_id"].is_string());
    assert_eq!(provider.calls.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn form_lead_runs_four_stages() {
    let provider = Arc::new(MockProvider::new());
    let base = spawn_server(provider.clone()).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/leads/form"))
        .json(&serde_json::json!({
            "name": "Jane Smith",
            "company": "Globex",
            "email": "jane@globex.io",
            "query": "Do you integrate with Salesforce?"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn malformed_email_is_rejected_before_any_stage() {
    let provider = Arc::new(MockProvider::new());
    let base = spawn_server(provider.clone()).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/leads/email"))
        .json(&serde_json::json!({
            "sender_email": "not-an-address",
            "subject": "Hi",
            "content": "Hello"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 422);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["field"], "sender_email");
    assert!(body["error"].as_str().unwrap().contains("Invalid email"));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn form_missing_query_is_rejected_with_zero_stages() {
    let provider = Arc::new(MockProvider::new());
    let base = spawn_server(provider.clone()).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/leads/form"))
        .json(&serde_json::json!({
            "name": "Jane Smith",
            "company": "Globex",
            "email": "jane@globex.io",
            "query": ""
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 422);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["field"], "query");
    assert!(body["error"].as_str().unwrap().contains("Missing required field"));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn stage_failure_surfaces_as_single_500() {
    let provider = Arc::new(MockProvider::failing());
    let base = spawn_server(provider.clone()).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/leads/email"))
        .json(&serde_json::json!({
            "sender_email": "john@acme.com",
            "subject": "Pricing",
            "content": "We need enterprise pricing for 500 seats"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("Lead qualification failed")
    );
    // First stage failed; nothing later was attempted.
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}
