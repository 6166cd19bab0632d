// ============================
// authgate-backend-bin/src/main.rs
// ============================
//! Server entry point: load configuration, build the shared state and
//! serve the router.
use authgate_backend_lib::{config::Settings, directory::StaticDirectory, router, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize configuration
    let config = Settings::load().or_else(|_| {
        tracing::debug!("config.toml not usable, trying config/default.toml");
        Settings::load_from("config/default.toml")
    })?;

    // Initialize tracing; RUST_LOG still wins when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load the static user directory
    let directory = StaticDirectory::from_file(&config.users_file)?;
    tracing::info!(
        users = directory.len(),
        path = %config.users_file.display(),
        "user directory loaded"
    );

    // Create application state
    let state = Arc::new(AppState::new(Arc::new(directory), &config));

    // Create the router
    let app = router::create_router(state);

    // Start the server
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
