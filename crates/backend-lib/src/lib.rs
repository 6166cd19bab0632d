// ============================
// authgate-backend-lib/src/lib.rs
// ============================
//! Core backend-lib functionality for the `AuthGate` server.

pub mod auth;
pub mod config;
pub mod directory;
pub mod error;
pub mod handlers;
pub mod router;

use crate::auth::{CredentialVerifier, TokenService};
use crate::config::Settings;
use crate::directory::UserDirectory;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// Everything here is built once at startup and immutable afterwards;
/// requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    /// Credential verifier over the injected user directory
    pub credentials: CredentialVerifier,
    /// Token issue/verify service
    pub tokens: Arc<TokenService>,
    /// Settings manager
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Create a new application state
    pub fn new(directory: Arc<dyn UserDirectory>, settings: &Settings) -> Self {
        let tokens = Arc::new(TokenService::new(
            &settings.token.secret,
            settings.token.ttl_secs,
        ));
        Self {
            credentials: CredentialVerifier::new(directory),
            tokens,
            settings: Arc::new(settings.clone()),
        }
    }
}
