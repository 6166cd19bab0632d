// ================
// common/src/lib.rs
// ================
//! Common types shared between the `AuthGate` client and server.
//! This module defines the HTTP wire shapes and the client-side
//! session gate built on top of them.

use serde::{Deserialize, Serialize};

pub mod session;

/// The subset of a user record that is safe to expose to clients.
///
/// This is the payload embedded in issued tokens and the body of
/// `GET /api/user`. It never carries the password; the only place a
/// record is converted into a profile is server-side, at the point
/// the password is dropped.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    /// Unique user identifier
    pub id: u64,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Age in years
    pub age: u32,
    /// Email address, unique per user
    pub email: String,
}

/// Body of `POST /api/login`.
///
/// Missing fields deserialize to empty strings so the handler can
/// answer 400 instead of a deserialization rejection.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Successful response of `POST /api/login`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginResponse {
    /// Signed, time-bounded session token
    pub token: String,
    /// Profile of the authenticated user
    pub user: UserProfile,
}

/// Generic `{"message": ...}` body used by the liveness probe and
/// every error response.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
