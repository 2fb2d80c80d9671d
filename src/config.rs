//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! Configuration is loaded once in `main` and handed to the application state.

use std::env;

use crate::constants::{
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_HACKERRANK_ALLOWED_DOMAIN,
    DEFAULT_HACKERRANK_BASE_URL, DEFAULT_HACKERRANK_TIMEOUT_SECONDS,
    DEFAULT_HACKERRANK_USER_AGENT, DEFAULT_RECENT_CHALLENGES_LIMIT, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT,
};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub hackerrank: HackerRankConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// HackerRank integration configuration
#[derive(Debug, Clone)]
pub struct HackerRankConfig {
    /// Site root used for REST and profile requests
    pub base_url: String,
    /// Submission URLs must be hosted on this domain or a subdomain of it
    pub allowed_domain: String,
    pub user_agent: String,
    /// Number of recent activity entries scanned during verification
    pub recent_limit: u32,
    pub timeout_seconds: u64,
}

impl Default for HackerRankConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_HACKERRANK_BASE_URL.to_string(),
            allowed_domain: DEFAULT_HACKERRANK_ALLOWED_DOMAIN.to_string(),
            user_agent: DEFAULT_HACKERRANK_USER_AGENT.to_string(),
            recent_limit: DEFAULT_RECENT_CHALLENGES_LIMIT,
            timeout_seconds: DEFAULT_HACKERRANK_TIMEOUT_SECONDS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from any variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_lookup(&lookup)?,
            database: DatabaseConfig::from_lookup(&lookup)?,
            hackerrank: HackerRankConfig::from_lookup(&lookup)?,
        })
    }
}

impl ServerConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            port: parse_var(lookup, "SERVER_PORT", DEFAULT_SERVER_PORT)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "labsync=info,tower_http=info".to_string()),
        })
    }
}

impl DatabaseConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            url: lookup("DATABASE_URL").ok_or_else(|| ConfigError::Missing("DATABASE_URL".to_string()))?,
            max_connections: parse_var(lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_DATABASE_MAX_CONNECTIONS)?,
        })
    }
}

impl HackerRankConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let timeout_seconds =
            parse_var(lookup, "HACKERRANK_TIMEOUT_SECONDS", defaults.timeout_seconds)?;
        if timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue("HACKERRANK_TIMEOUT_SECONDS".to_string()));
        }

        Ok(Self {
            base_url: lookup("HACKERRANK_BASE_URL").unwrap_or(defaults.base_url),
            allowed_domain: lookup("HACKERRANK_ALLOWED_DOMAIN")
                .map(|domain| domain.trim().to_lowercase())
                .unwrap_or(defaults.allowed_domain),
            user_agent: lookup("HACKERRANK_USER_AGENT").unwrap_or(defaults.user_agent),
            recent_limit: parse_var(lookup, "HACKERRANK_RECENT_LIMIT", defaults.recent_limit)?,
            timeout_seconds,
        })
    }
}

/// Read an optional variable, falling back to `default` when unset
fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(name.to_string())),
        None => Ok(default),
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
