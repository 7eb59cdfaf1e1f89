use std::net::SocketAddr;
use std::sync::Arc;

use estate_api::config::ServerConfig;
use estate_api::router::build_app_router;
use estate_api::state::AppState;
use estate_blob::{BlobStore, MemoryBlobStore, S3BlobStore};
use estate_db::storage::{MemStorage, PgStorage, Storage};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "estate_api=debug,estate_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        image_backend = config.image_backend.as_str(),
        "Loaded server configuration",
    );

    // --- Storage ---
    let storage = build_storage(&config).await;

    // --- Object storage ---
    let blobs: Arc<dyn BlobStore> = match &config.object_storage {
        Some(settings) => Arc::new(S3BlobStore::connect(settings).await),
        None => {
            tracing::warn!("OBJECT_STORAGE_BUCKET not set, uploads are kept in memory");
            Arc::new(MemoryBlobStore::new())
        }
    };

    // --- App state ---
    let state = AppState {
        storage,
        blobs,
        config: Arc::new(config.clone()),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Postgres when `DATABASE_URL` is set, otherwise a seeded in-memory store.
async fn build_storage(config: &ServerConfig) -> Arc<dyn Storage> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("DATABASE_URL not set, using the in-memory demo store");
        let storage = MemStorage::new();
        estate_db::seed::seed_demo_data(&storage)
            .await
            .expect("Failed to seed demo data");
        return Arc::new(storage);
    };

    let pool = estate_db::create_pool(database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    estate_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    estate_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    let storage = PgStorage::new(pool);
    if config.seed_demo_data {
        estate_db::seed::seed_if_empty(&storage)
            .await
            .expect("Failed to seed demo data");
    }
    Arc::new(storage)
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
