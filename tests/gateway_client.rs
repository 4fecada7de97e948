//! The reqwest gateway adapter against a local stand-in for the AI gateway.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::{Value, json};

use taggen::application::ports::completion_port::{CompletionError, CompletionPort};
use taggen::infrastructure::ai::GatewayCompletionClient;

#[derive(Clone)]
struct Gateway {
    status: StatusCode,
    body: String,
    seen: Arc<Mutex<Vec<(Option<String>, Value)>>>,
}

async fn chat_completions(
    State(gw): State<Gateway>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let auth = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    gw.seen.lock().unwrap().push((auth, body));
    (gw.status, gw.body.clone()).into_response()
}

async fn spawn_gateway(status: StatusCode, body: impl Into<String>) -> (String, Gateway) {
    let gw = Gateway {
        status,
        body: body.into(),
        seen: Arc::new(Mutex::new(Vec::new())),
    };
    let app = Router::new()
        .route("/v1/chat/completions", post(chat_completions))
        .with_state(gw.clone());
    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/v1/chat/completions"), gw)
}

fn client(endpoint: &str, key: Option<&str>) -> GatewayCompletionClient {
    GatewayCompletionClient::new(
        endpoint,
        "google/gemini-2.5-flash",
        key.map(str::to_string),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn sends_bearer_model_and_messages() {
    let reply = json!({
        "choices": [{ "message": { "role": "assistant", "content": "diy, woodworking, shelf" } }]
    });
    let (endpoint, gw) = spawn_gateway(StatusCode::OK, reply.to_string()).await;

    let text = client(&endpoint, Some("test-key"))
        .complete("system rules", "building a shelf")
        .await
        .unwrap();
    assert_eq!(text, "diy, woodworking, shelf");

    let seen = gw.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (auth, body) = &seen[0];
    assert_eq!(auth.as_deref(), Some("Bearer test-key"));
    assert_eq!(
        body,
        &json!({
            "model": "google/gemini-2.5-flash",
            "messages": [
                { "role": "system", "content": "system rules" },
                { "role": "user", "content": "building a shelf" }
            ]
        })
    );
}

#[tokio::test]
async fn maps_rate_limit_and_credit_statuses() {
    let (endpoint, _) = spawn_gateway(StatusCode::TOO_MANY_REQUESTS, "slow down").await;
    let err = client(&endpoint, Some("k")).complete("s", "u").await.unwrap_err();
    assert!(matches!(err, CompletionError::RateLimited));

    let (endpoint, _) = spawn_gateway(StatusCode::PAYMENT_REQUIRED, "pay up").await;
    let err = client(&endpoint, Some("k")).complete("s", "u").await.unwrap_err();
    assert!(matches!(err, CompletionError::QuotaExhausted));

    let (endpoint, gw) = spawn_gateway(StatusCode::BAD_GATEWAY, "oops").await;
    let err = client(&endpoint, Some("k")).complete("s", "u").await.unwrap_err();
    assert!(matches!(err, CompletionError::Status { status: 502 }));
    // exactly one attempt, no retries
    assert_eq!(gw.seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn missing_content_is_empty_text() {
    for reply in [
        json!({ "choices": [] }).to_string(),
        json!({ "id": "x" }).to_string(),
        "<html>not json</html>".to_string(),
    ] {
        let (endpoint, _) = spawn_gateway(StatusCode::OK, reply.clone()).await;
        let text = client(&endpoint, Some("k")).complete("s", "u").await.unwrap();
        assert_eq!(text, "", "{reply}");
    }
}

#[tokio::test]
async fn missing_key_makes_no_request() {
    let (endpoint, gw) = spawn_gateway(StatusCode::OK, "{}").await;
    let err = client(&endpoint, None).complete("s", "u").await.unwrap_err();
    assert!(matches!(err, CompletionError::NotConfigured));
    assert!(gw.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unreachable_gateway_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let endpoint = format!("http://{addr}/v1/chat/completions");
    let err = client(&endpoint, Some("k")).complete("s", "u").await.unwrap_err();
    assert!(matches!(err, CompletionError::Transport(_)));
}
