// ============================
// authgate-backend-lib/src/auth/token.rs
// ============================
//! Token issuance and verification.
//!
//! Tokens are self-contained HS256 JWTs carrying the user profile plus
//! issuance and expiry timestamps. The signing key is fixed at startup.
//! There is no server-side token state: every verification recomputes
//! validity from the signature and the embedded timestamps.
use crate::error::AppError;
use authgate_common::UserProfile;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims embedded in every issued token: the client-safe profile
/// fields at the top level, plus the standard timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(flatten)]
    pub user: UserProfile,
    /// Issuance time (seconds since epoch)
    pub iat: i64,
    /// Expiry time (seconds since epoch)
    pub exp: i64,
}

/// Stateless issue/verify service around one signing key.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
    validation: Validation,
}

impl TokenService {
    /// Build a service from the configured secret and lifetime.
    ///
    /// Key validity is a startup concern; see `Settings::ensure_valid`.
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // The library's own exp check allows the boundary second plus
        // leeway; expiry is recomputed below instead.
        validation.validate_exp = false;
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::seconds(ttl_secs),
            validation,
        }
    }

    /// Issue a signed token embedding `user`, expiring `ttl` from now.
    pub fn issue(&self, user: &UserProfile) -> Result<String, AppError> {
        self.issue_at(user, Utc::now())
    }

    /// Verify a presented token and return the profile as issued.
    ///
    /// Bad signature, malformed structure and expiry all collapse to
    /// [`AppError::InvalidToken`]; the underlying cause is only logged.
    pub fn verify(&self, token: &str) -> Result<UserProfile, AppError> {
        self.verify_at(token, Utc::now())
    }

    fn issue_at(&self, user: &UserProfile, now: DateTime<Utc>) -> Result<String, AppError> {
        let claims = Claims {
            user: user.clone(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(format!("failed to sign token: {e}")))
    }

    fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<UserProfile, AppError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|e| {
                tracing::debug!(error = %e, "token rejected");
                AppError::InvalidToken
            })?;

        // A token is live strictly before its expiry instant.
        if now.timestamp() >= data.claims.exp {
            tracing::debug!("token rejected: expired");
            return Err(AppError::InvalidToken);
        }

        Ok(data.claims.user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL_24H: i64 = 60 * 60 * 24;

    fn sample_user() -> UserProfile {
        UserProfile {
            id: 1,
            first_name: "Laura".to_string(),
            last_name: "Gomez".to_string(),
            age: 31,
            email: "laura.gomez@example.com".to_string(),
        }
    }

    fn service() -> TokenService {
        TokenService::new("test-signing-secret", TTL_24H)
    }

    #[test]
    fn round_trip_returns_the_profile_unchanged() {
        let svc = service();
        let user = sample_user();

        let token = svc.issue(&user).unwrap();
        let decoded = svc.verify(&token).unwrap();

        assert_eq!(decoded, user);
    }

    #[test]
    fn token_is_live_strictly_before_expiry() {
        let svc = service();
        let now = Utc::now();
        let token = svc.issue_at(&sample_user(), now).unwrap();

        let just_before = now + Duration::seconds(TTL_24H - 1);
        assert!(svc.verify_at(&token, just_before).is_ok());
    }

    #[test]
    fn expiry_instant_itself_is_expired() {
        let svc = service();
        let now = Utc::now();
        let token = svc.issue_at(&sample_user(), now).unwrap();

        let at_expiry = now + Duration::seconds(TTL_24H);
        assert!(matches!(
            svc.verify_at(&token, at_expiry),
            Err(AppError::InvalidToken)
        ));

        let after_expiry = now + Duration::seconds(TTL_24H + 3600);
        assert!(matches!(
            svc.verify_at(&token, after_expiry),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = service().issue(&sample_user()).unwrap();
        let other = TokenService::new("a-different-secret", TTL_24H);

        assert!(matches!(other.verify(&token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let svc = service();
        let token = svc.issue(&sample_user()).unwrap();

        let mut impostor = sample_user();
        impostor.id = 999;
        impostor.email = "impostor@example.com".to_string();
        let other_token = svc.issue(&impostor).unwrap();

        // Splice the impostor payload onto the original signature.
        let original: Vec<&str> = token.split('.').collect();
        let other: Vec<&str> = other_token.split('.').collect();
        let spliced = format!("{}.{}.{}", original[0], other[1], original[2]);

        assert!(matches!(svc.verify(&spliced), Err(AppError::InvalidToken)));
    }

    #[test]
    fn garbage_tokens_are_rejected() {
        let svc = service();
        for garbage in ["", "not-a-token", "a.b.c", "eyJhbGciOiJIUzI1NiJ9.."] {
            assert!(
                matches!(svc.verify(garbage), Err(AppError::InvalidToken)),
                "expected rejection for {garbage:?}"
            );
        }
    }

    #[test]
    fn claims_spacing_matches_ttl() {
        let svc = TokenService::new("test-signing-secret", 3600);
        let now = Utc::now();
        let token = svc.issue_at(&sample_user(), now).unwrap();

        let data = jsonwebtoken::decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"test-signing-secret"),
            &svc.validation,
        )
        .unwrap();

        assert_eq!(data.claims.iat, now.timestamp());
        assert_eq!(data.claims.exp - data.claims.iat, 3600);
    }

    #[test]
    fn claims_serialize_profile_fields_at_top_level() {
        let claims = Claims {
            user: sample_user(),
            iat: 100,
            exp: 200,
        };
        let value = serde_json::to_value(&claims).unwrap();

        assert_eq!(value["email"], "laura.gomez@example.com");
        assert_eq!(value["exp"], 200);
        assert!(value.get("user").is_none());
        assert!(value.get("password").is_none());
    }
}
