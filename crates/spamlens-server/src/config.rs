//! Server configuration
//!
//! Read from the process environment (after `.env` is loaded by `main`).

use anyhow::{Context, Result};
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 5002;
pub const DEFAULT_CLASSIFIER_URL: &str = "http://localhost:8001";
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/spamdb";
pub const DEFAULT_CLASSIFIER_TIMEOUT_SECS: u64 = 10;

/// `DATABASE_URL` value that selects the in-memory store
pub const MEMORY_STORE_URL: &str = "memory://";

/// Where messages are persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres(String),
    Memory,
}

/// Configuration for the API server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listening port
    pub port: u16,
    /// Base URL of the classifier service (`/predict` is appended)
    pub classifier_url: String,
    /// Storage connection string
    pub database_url: String,
    /// Upper bound for a single classifier call
    pub classifier_timeout: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(v) => v
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT: {}", v))?,
            None => DEFAULT_PORT,
        };

        let classifier_timeout_secs = match get("CLASSIFIER_TIMEOUT_SECS") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .with_context(|| format!("Invalid CLASSIFIER_TIMEOUT_SECS: {}", v))?,
            None => DEFAULT_CLASSIFIER_TIMEOUT_SECS,
        };

        let classifier_url = get("CLASSIFIER_URL")
            .or_else(|| get("API_URL"))
            .unwrap_or_else(|| DEFAULT_CLASSIFIER_URL.to_string());

        Ok(Self {
            port,
            classifier_url: classifier_url.trim_end_matches('/').to_string(),
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            classifier_timeout: Duration::from_secs(classifier_timeout_secs),
        })
    }

    pub fn store_backend(&self) -> StoreBackend {
        if self.database_url == MEMORY_STORE_URL {
            StoreBackend::Memory
        } else {
            StoreBackend::Postgres(self.database_url.clone())
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            classifier_url: DEFAULT_CLASSIFIER_URL.to_string(),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            classifier_timeout: Duration::from_secs(DEFAULT_CLASSIFIER_TIMEOUT_SECS),
        }
    }
}
