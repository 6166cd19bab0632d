// ============================
// authgate-backend-lib/src/config.rs
// ============================
//! Configuration management.
use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Server bind address
    pub bind_addr: SocketAddr,
    /// Path to the static user directory file
    pub users_file: PathBuf,
    /// Log level
    pub log_level: String,
    /// Token signing settings
    pub token: TokenSettings,
}

/// Signing key and lifetime for issued tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenSettings {
    /// Signing secret. Loaded once at startup and never rotated at
    /// runtime; an empty secret is a fatal configuration error.
    pub secret: String,
    /// Token lifetime in seconds
    pub ttl_secs: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".parse().unwrap(),
            users_file: PathBuf::from("data/users.json"),
            log_level: "info".to_string(),
            token: TokenSettings::default(),
        }
    }
}

impl Default for TokenSettings {
    fn default() -> Self {
        Self {
            secret: String::new(),
            ttl_secs: 60 * 60 * 24, // 24 hours
        }
    }
}

impl Settings {
    /// Load settings from the default config file location
    pub fn load() -> Result<Self> {
        Self::load_from("config.toml")
    }

    /// Load settings from a specific config file, merged with
    /// `AUTHGATE_`-prefixed environment variables
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let settings: Settings = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("AUTHGATE_").split("__"))
            .extract()?;
        settings.ensure_valid()?;
        Ok(settings)
    }

    /// Reject configurations that cannot produce a working service
    pub fn ensure_valid(&self) -> Result<()> {
        if self.token.secret.is_empty() {
            anyhow::bail!("token.secret must be set (config file or AUTHGATE_TOKEN__SECRET)");
        }
        if self.token.ttl_secs <= 0 {
            anyhow::bail!("token.ttl_secs must be positive");
        }
        Ok(())
    }
}
