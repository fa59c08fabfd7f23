mod companion;
mod config;
mod errors;
mod lexicon;
mod llm_client;
mod models;
mod routes;
mod screening;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::companion::session::SessionStore;
use crate::config::Config;
use crate::llm_client::{GeminiClient, LanguageModel};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting MindfulCompanion API v{}", env!("CARGO_PKG_VERSION"));

    // Live model is optional; without it every reply comes from the canned bank
    let model: Option<Arc<dyn LanguageModel>> = match config.gemini_api_key.clone() {
        Some(api_key) if config.model_enabled() => {
            let client = GeminiClient::new(
                &config.gemini_api_url,
                &config.gemini_model,
                api_key,
                Duration::from_secs(config.llm_timeout_secs),
            )?;
            info!("LLM client initialized (model: {})", client.model());
            Some(Arc::new(client))
        }
        _ => {
            info!(
                test_mode = config.test_mode,
                "No live model configured, using canned replies"
            );
            None
        }
    };

    let state = AppState {
        sessions: SessionStore::new(),
        model,
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
