//! Stub voice provider and request helpers shared by the integration tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::response::Response;
use axum::routing::post;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

use lead_intake::config::app_config::Config;
use lead_intake::{build_app, AppState};

pub const TEST_API_KEY: &str = "key_test_123";
pub const TEST_FROM_NUMBER: &str = "+18175550100";

/// What the stub provider saw for one call.
#[derive(Debug, Clone)]
pub struct SeenCall {
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct StubProvider {
    status: StatusCode,
    reply: Value,
    seen: Arc<Mutex<Vec<SeenCall>>>,
}

async fn create_phone_call(
    State(stub): State<StubProvider>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    stub.seen
        .lock()
        .unwrap()
        .push(SeenCall { authorization, body });
    (stub.status, Json(stub.reply.clone()))
}

/// Starts a provider that answers every call with `status` and `reply`.
/// Returns its endpoint url and the log of received calls.
pub async fn spawn_provider(status: StatusCode, reply: Value) -> (String, Arc<Mutex<Vec<SeenCall>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let stub = StubProvider {
        status,
        reply,
        seen: seen.clone(),
    };
    let app = Router::new()
        .route("/v2/create-phone-call", post(create_phone_call))
        .with_state(stub);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/v2/create-phone-call", addr), seen)
}

/// An endpoint on a port nothing listens on.
pub async fn unreachable_provider() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/v2/create-phone-call", addr)
}

pub fn test_config(provider_url: &str) -> Config {
    let vars: HashMap<&str, String> = HashMap::from([
        ("RETELL_API_KEY", TEST_API_KEY.to_string()),
        ("RETELL_FROM_NUMBER", TEST_FROM_NUMBER.to_string()),
        ("RETELL_API_URL", provider_url.to_string()),
    ]);
    Config::from_vars(|key| vars.get(key).cloned()).expect("valid test config")
}

pub fn app_for(provider_url: &str) -> Router {
    let config = test_config(provider_url);
    build_app(Arc::new(AppState::from_config(&config)), None)
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn response_json(resp: Response) -> Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("json response")
}
