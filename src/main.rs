use anyhow::{Context, Result};
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gemini_chat::{
    config::Config,
    routes,
    services::generator::build_generator,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,gemini_chat=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    // Keep serving the page without a key; chat calls will fail with 500.
    if config.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY not found in environment variables");
    }

    let generator = build_generator(&config).context("Failed to build Gemini client")?;
    let state = AppState::shared(generator);

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router(&config.public_dir)
        .with_state(state)
        .layer(cors);

    let addr = config.listen_addr().await?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!(%addr, model = %config.gemini_model, "chat server running");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
