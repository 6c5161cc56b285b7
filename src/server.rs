//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, the optional study tips provider, and the Axum
//! server lifecycle.

use crate::application::services::StudyTipsService;
use crate::config::Config;
use crate::domain::tips_provider::TipsProvider;
use crate::infrastructure::genai::GroqTipsProvider;
use crate::infrastructure::persistence;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool
/// - Apply migrations
/// - Groq tips provider (or default tips when no key is set)
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Router construction fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = persistence::connect(&config.database_url, config.db_max_connections).await?;
    tracing::info!("Connected to database");

    persistence::migrate(&pool).await?;
    tracing::info!("Migrations applied");

    let provider: Option<Arc<dyn TipsProvider>> = match config.groq_settings() {
        Some(settings) => match GroqTipsProvider::new(settings) {
            Ok(groq) => {
                tracing::info!("Study tips enabled (Groq, model {})", config.groq_model);
                Some(Arc::new(groq))
            }
            Err(e) => {
                tracing::warn!("Failed to build Groq client: {}. Using default tips.", e);
                None
            }
        },
        None => {
            tracing::info!("Study tips disabled (default tips)");
            None
        }
    };

    let state = AppState::new(Arc::new(pool), StudyTipsService::new(provider));

    let app = app_router(state, &config.router_options())?;

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
