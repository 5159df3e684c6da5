// src/main.rs
use std::sync::Arc;

use anyhow::Context;
use axum::routing::get;
use multilingual_chatbot::{config::Config, logging, routes, state::AppState};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load();
    let _log_guard = logging::init(&config.log_dir)
        .with_context(|| format!("failed to open log directory {}", config.log_dir.display()))?;

    let state = AppState::from_config(&config).context("failed to start chatbot engine")?;

    info!(
        engine = state.engine.name(),
        languages = state.engine.supported_languages().len(),
        log_dir = %config.log_dir.display(),
        "engine ready"
    );

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router()
        .route("/", get(|| async { "Multilingual Chatbot API" }))
        .with_state(Arc::new(state))
        .layer(cors);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("chatbot listening on http://{addr}");
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
