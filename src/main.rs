//! Server binary: reads settings, picks the store, serves the API until Ctrl-C.

use fitness_tracker::{app, connect_lazy, ensure_tables, AppState, MemoryStore, PgStore, RecordManager, Settings, StoreKind};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fitness_tracker=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let manager = match settings.store {
        StoreKind::Postgres => {
            let store = PgStore::new(connect_lazy(&settings)?);
            let manager = RecordManager::new(Arc::new(store.clone()));
            manager.test_connection().await?;
            ensure_tables(store.pool()).await?;
            manager
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory store; records are lost on exit");
            RecordManager::new(Arc::new(MemoryStore::new()))
        }
    };

    let router = app(AppState::new(manager), &settings);
    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
    }
    tracing::info!("shutting down");
}
