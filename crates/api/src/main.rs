use std::net::SocketAddr;
use std::sync::Arc;

use eskipara_cloudinary::{CloudinaryConfig, CloudinaryUploader};
use eskipara_core::lifecycle::ListingLifecycle;
use eskipara_db::PgListingStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use eskipara_api::config::ServerConfig;
use eskipara_api::router::build_app_router;
use eskipara_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eskipara_api=debug,eskipara_core=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = eskipara_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    eskipara_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    eskipara_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Photo uploads ---
    let cloudinary = CloudinaryConfig::from_env();
    if !cloudinary.is_configured() {
        tracing::warn!("Cloudinary is not configured; listings with photos cannot be saved");
    }
    let uploader = CloudinaryUploader::new(cloudinary).expect("Failed to build HTTP client");

    // --- App state ---
    let lifecycle = ListingLifecycle::new(
        Arc::new(PgListingStore::new(pool)),
        Arc::new(uploader),
    );
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    let state = AppState {
        lifecycle: Arc::new(lifecycle),
        config: Arc::new(config),
    };

    let app = build_app_router(state);

    // --- Start server ---
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

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
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
