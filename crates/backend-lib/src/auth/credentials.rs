// ============================
// authgate-backend-lib/src/auth/credentials.rs
// ============================
//! Credential verification against the injected user directory.
use crate::directory::UserDirectory;
use authgate_common::UserProfile;
use std::sync::Arc;

/// Pure read-side check of an email/password pair.
///
/// The caller is responsible for rejecting empty fields before calling;
/// this component only answers "does a matching record exist".
#[derive(Clone)]
pub struct CredentialVerifier {
    directory: Arc<dyn UserDirectory>,
}

impl CredentialVerifier {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }

    /// Return the matching user's profile, or `None`.
    ///
    /// `None` never distinguishes an unknown email from a wrong
    /// password.
    pub async fn verify(&self, email: &str, password: &str) -> Option<UserProfile> {
        self.directory
            .find_by_credentials(email, password)
            .await
            .map(|record| record.profile())
    }
}
