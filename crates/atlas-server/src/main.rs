//! Atlas Server
//!
//! Backend for the New Year resolutions form: stores submissions, lists
//! participants, and serves a shuffled feed of community wishes that can
//! be liked.
//!
//! Uses SQLite (embedded) for the single `resolutions` table.

mod config;
mod error;
mod handlers;
mod services;
mod storage;

use anyhow::{Context, Result};
use atlas_types::WISH_FEED_SIZE;
use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::Config;
use services::{ResolutionBoard, WishFeed};
use storage::Database;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub board: Arc<ResolutionBoard>,
    pub wish_feed: Arc<WishFeed>,
}

impl AppState {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            board: Arc::new(ResolutionBoard::new(db.clone())),
            wish_feed: Arc::new(WishFeed::new(db.clone(), WISH_FEED_SIZE)),
            db,
        }
    }
}

#[tokio::main]
async fn main() {
    install_panic_hook();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Atlas Server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

/// Route panics through tracing so they land next to request logs
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let message = panic_message(info.payload());
        match info.location() {
            Some(at) => error!(file = at.file(), line = at.line(), "panic: {}", message),
            None => error!("panic: {}", message),
        }
        eprintln!("atlas-server panicked: {}", message);
    }));
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}

async fn run_server() -> Result<()> {
    info!("Loading configuration...");
    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        "Config loaded: bind={}, db={}",
        config.bind_address, config.database_path
    );

    tokio::fs::create_dir_all(&config.data_dir)
        .await
        .with_context(|| {
            format!(
                "Failed to create data directory {}",
                config.data_dir.display()
            )
        })?;

    info!("Initializing SQLite database...");
    let db = Arc::new(
        Database::new(&config.database_path)
            .await
            .context("Failed to initialize database")?,
    );

    let state = AppState::new(db);
    let app = router(state, config.static_dir.as_deref());

    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .context("Failed to bind to address")?;

    info!("Server listening on {}", config.bind_address);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

fn router(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut app = Router::new()
        .route("/health", get(handlers::health))
        .route("/characters", get(handlers::characters::list))
        .route(
            "/resolutions",
            get(handlers::resolutions::list).post(handlers::resolutions::create),
        )
        .route("/wishes", get(handlers::wishes::list))
        .route("/wishes/like", post(handlers::wishes::like));

    if let Some(dir) = static_dir {
        info!("Static files directory: {}", dir.display());
        app = app
            .nest_service("/avatars", ServeDir::new(dir.join("avatars")))
            // SPA fallback - unknown routes serve index.html
            .fallback_service(
                ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html"))),
            );
    }

    app.layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    )
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
