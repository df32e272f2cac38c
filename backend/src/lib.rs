use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod handlers {
    pub mod lead_dtos;
    pub mod lead_handlers;
}
pub mod api {
    pub mod retell;
    pub mod retell_dtos;
}
pub mod config {
    pub mod app_config;
}
pub mod utils {
    pub mod json_text;
    pub mod phone_format;
}
pub mod error;

use api::retell::{CallDispatcher, RetellClient};
use config::app_config::Config;
use handlers::lead_handlers;

pub struct AppState {
    pub from_number: Option<String>,
    pub dispatcher: Arc<dyn CallDispatcher>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            from_number: config.retell_from_number.clone(),
            dispatcher: Arc::new(RetellClient::new(
                config.retell_api_url.clone(),
                config.retell_api_key.clone(),
            )),
        }
    }
}

async fn health_check() -> &'static str {
    "OK"
}

fn cors_layer(allowed_origin: Option<&str>) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::CONTENT_TYPE]);

    match allowed_origin.and_then(|origin| HeaderValue::from_str(origin).ok()) {
        Some(origin) => cors.allow_origin(origin),
        None => cors.allow_origin(Any),
    }
}

pub fn build_app(state: Arc<AppState>, allowed_origin: Option<&str>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/lead", post(lead_handlers::submit_lead))
        .route("/api/test-call", post(lead_handlers::trigger_test_call))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_layer(allowed_origin))
        .with_state(state)
}
