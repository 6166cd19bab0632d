// ============================
// authgate-backend-lib/src/auth/middleware.rs
// ============================
//! Extractor protecting authenticated routes.
use crate::error::AppError;
use crate::AppState;
use authgate_common::UserProfile;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use metrics::counter;
use std::sync::Arc;

/// Extractor that validates a `Bearer` token and provides the profile
/// embedded at issuance. Handlers taking `AuthUser` never run for
/// unauthenticated requests.
#[derive(Debug)]
pub struct AuthUser(pub UserProfile);

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::MissingToken)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .filter(|t| !t.is_empty())
            .ok_or(AppError::MalformedAuthHeader)?;

        match state.tokens.verify(token) {
            Ok(user) => Ok(AuthUser(user)),
            Err(_) => {
                counter!("auth.token.rejected").increment(1);
                // Expired, forged and malformed all surface the same way.
                Err(AppError::InvalidToken)
            }
        }
    }
}
