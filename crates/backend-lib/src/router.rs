// ============================
// authgate-backend-lib/src/router.rs
// ============================
//! HTTP router assembly.
use crate::handlers;
use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Create the application router.
///
/// CORS is wide open; lock this down when deploying behind a known
/// frontend host.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/login", post(handlers::login))
        .route("/api/user", get(handlers::current_user))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
