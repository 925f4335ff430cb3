//! Server Configuration
//!
//! Loads configuration from environment variables.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::auth::jwt;

/// Public half of the Ed25519 key pair used by the test suites.
pub const TEST_JWT_PUBLIC_KEY: &str = "LS0tLS1CRUdJTiBQVUJMSUMgS0VZLS0tLS0KTUNvd0JRWURLMlZ3QXlFQW80TlJjVnQ2ajF3OHRCWUtxUEJzS0krNUZVREkwVGtJaHF4WWlud05TRlU9Ci0tLS0tRU5EIFBVQkxJQyBLRVktLS0tLQo=";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080")
    pub bind_address: String,

    /// Ed25519 public key for access token verification (PEM, base64-encoded)
    pub jwt_public_key: String,

    /// JSON navigation tree to serve instead of the built-in one (optional)
    pub navigation_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Fails when `JWT_PUBLIC_KEY` is missing or is not an Ed25519 public key,
    /// since every session would otherwise resolve to anonymous access.
    pub fn from_env() -> Result<Self> {
        let jwt_public_key = env::var("JWT_PUBLIC_KEY").context("JWT_PUBLIC_KEY must be set")?;
        jwt::decoding_key(&jwt_public_key).context("JWT_PUBLIC_KEY is not a usable key")?;

        Ok(Self {
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            jwt_public_key,
            navigation_file: env::var("NAVIGATION_FILE")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        })
    }

    /// Check if an external navigation tree is configured.
    #[must_use]
    pub const fn has_navigation_file(&self) -> bool {
        self.navigation_file.is_some()
    }

    /// Create a default configuration for testing.
    #[must_use]
    pub fn default_for_test() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".into(),
            jwt_public_key: TEST_JWT_PUBLIC_KEY.into(),
            navigation_file: None,
        }
    }
}
