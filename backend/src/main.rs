use anyhow::Context;
use dotenvy::dotenv;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use lead_intake::config::app_config::Config;
use lead_intake::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let _guard = match config.sentry_dsn.as_deref() {
        Some(dsn) => Some(sentry::init(sentry::ClientOptions {
            dsn: Some(dsn.parse::<sentry::types::Dsn>().context("SENTRY_DSN is not a valid DSN")?),
            release: sentry::release_name!(),
            ..Default::default()
        })),
        None => None,
    };

    let state = Arc::new(AppState::from_config(&config));
    let app = build_app(state, config.allowed_origin.as_deref());

    let listener = TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!("Lead intake listening on {}", config.listen_addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
