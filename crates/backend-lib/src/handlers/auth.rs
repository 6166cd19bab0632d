// ============================
// authgate-backend-lib/src/handlers/auth.rs
// ============================
//! Login and protected-resource handlers.
use crate::auth::AuthUser;
use crate::error::AppError;
use crate::AppState;
use authgate_common::{ApiMessage, LoginRequest, LoginResponse, UserProfile};
use axum::{extract::State, Json};
use metrics::counter;
use std::sync::Arc;

/// `POST /api/login`
///
/// Field presence is checked here, before any directory lookup; the
/// verifier itself only ever sees non-empty credentials.
#[tracing::instrument(skip(state, req))]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(AppError::MissingCredentials);
    }

    let user = match state.credentials.verify(&req.email, &req.password).await {
        Some(user) => user,
        None => {
            counter!("auth.login.rejected").increment(1);
            // One generic answer for unknown email and wrong password.
            return Err(AppError::InvalidCredentials);
        }
    };

    let token = state.tokens.issue(&user)?;

    counter!("auth.login.success").increment(1);
    tracing::info!(user_id = user.id, "login succeeded");

    Ok(Json(LoginResponse { token, user }))
}

/// `GET /api/user`
///
/// The extractor has already verified the token; the body is the
/// profile embedded at issuance, not a fresh directory read.
pub async fn current_user(AuthUser(user): AuthUser) -> Json<UserProfile> {
    Json(user)
}

/// `GET /`
///
/// Liveness probe.
pub async fn root() -> Json<ApiMessage> {
    Json(ApiMessage::new("Authentication API is running"))
}
