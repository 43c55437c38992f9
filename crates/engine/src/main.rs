//! Concept Clarifier Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tutor_engine::api::build_router;
use tutor_engine::infrastructure::config::{load_dotenv, EngineConfig};
use tutor_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tutor_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Concept Clarifier Engine");

    // Load configuration
    let config = EngineConfig::from_env();
    let app = Arc::new(App::from_config(&config)?);

    let router = build_router(
        app,
        config.cors_allowed_origins.as_deref(),
        &config.static_dir,
    );

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server_host, config.server_port).parse()?;
    tracing::info!("Listening on http://{}", addr);
    tracing::info!("Concept Clarifier API ready");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
