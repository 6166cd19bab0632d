// ============================
// authgate-backend-lib/src/directory.rs
// ============================
//! Read-only user directory.
//!
//! The directory is the source of truth for user records, queried by
//! email+password during login. It is loaded once at startup and never
//! mutated; swapping in a real store only requires satisfying
//! [`UserDirectory`].
use crate::error::AppError;
use async_trait::async_trait;
use authgate_common::UserProfile;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A full user record as stored in the directory.
///
/// Passwords are held as plain strings because the source data carries
/// no hash format. Records never leave this module intact; everything
/// client-facing goes through [`UserRecord::profile`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub email: String,
    pub password: String,
}

impl UserRecord {
    /// Drop the password field. This is the single point where a
    /// record becomes a client-safe profile.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age: self.age,
            email: self.email.clone(),
        }
    }
}

/// Read-only lookup seam over the user store.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find the first record whose email and password both match
    /// exactly (case-sensitive byte equality).
    async fn find_by_credentials(&self, email: &str, password: &str) -> Option<UserRecord>;
}

/// In-process directory backed by a static record list.
pub struct StaticDirectory {
    users: Vec<UserRecord>,
}

impl StaticDirectory {
    /// Load the directory from a JSON array file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let users: Vec<UserRecord> = serde_json::from_str(&raw)?;
        Ok(Self { users })
    }

    /// Build a directory from in-memory records.
    pub fn from_records(users: Vec<UserRecord>) -> Self {
        Self { users }
    }

    /// Number of records loaded.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserDirectory for StaticDirectory {
    async fn find_by_credentials(&self, email: &str, password: &str) -> Option<UserRecord> {
        // Email uniqueness is an assumed precondition of the input
        // data, not an enforced invariant; first match wins.
        self.users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .cloned()
    }
}
