//! Service configuration loaded from environment variables.
//!
//! Each binary loads its configuration once at startup, validates it, and
//! passes it down explicitly; nothing reads the environment after that.
//!
//! ## User directory (`user-api`)
//!
//! - `DATABASE_URL` - SQLite URL (default: `sqlite:users.db`)
//! - `USER_API_LISTEN` - Bind address (default: `0.0.0.0:8000`)
//! - `TOKEN_SECRET` - HS256 signing secret (**required**)
//! - `TOKEN_TTL_HOURS` - Token lifetime (default: 24)
//! - `BCRYPT_COST` - Password hashing cost (default: bcrypt's default)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//!
//! ## Shortener (`shortlink`)
//!
//! - `SHORTLINK_LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `BASE_URL` - Public prefix for short URLs (default: `http://localhost:8080`)
//!
//! ## Shared
//!
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;

/// Configuration for the user directory service.
#[derive(Debug, Clone)]
pub struct UserApiConfig {
    pub database_url: String,
    pub listen_addr: String,
    /// HS256 signing secret for bearer tokens. Never logged.
    pub token_secret: String,
    pub token_ttl_hours: i64,
    pub bcrypt_cost: u32,
    pub db_max_connections: u32,
    pub log_level: String,
    pub log_format: String,
}

impl UserApiConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `TOKEN_SECRET` is missing.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:users.db".to_string());
        let listen_addr =
            env::var("USER_API_LISTEN").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

        let token_secret = env::var("TOKEN_SECRET").context("TOKEN_SECRET must be set")?;

        let token_ttl_hours = env::var("TOKEN_TTL_HOURS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(24);

        let bcrypt_cost = env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(bcrypt::DEFAULT_COST);

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            database_url,
            listen_addr,
            token_secret,
            token_ttl_hours,
            bcrypt_cost,
            db_max_connections,
            log_level: load_log_level(),
            log_format: load_log_format(),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `DATABASE_URL` is not a SQLite URL
    /// - `USER_API_LISTEN` is not `host:port`
    /// - `TOKEN_SECRET` is empty
    /// - `TOKEN_TTL_HOURS` is not positive
    /// - `BCRYPT_COST` is outside bcrypt's supported range
    /// - `LOG_FORMAT` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "USER_API_LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.token_secret.is_empty() {
            anyhow::bail!("TOKEN_SECRET must not be empty");
        }

        if self.token_ttl_hours <= 0 {
            anyhow::bail!(
                "TOKEN_TTL_HOURS must be positive, got {}",
                self.token_ttl_hours
            );
        }

        if !(4..=31).contains(&self.bcrypt_cost) {
            anyhow::bail!(
                "BCRYPT_COST must be between 4 and 31, got {}",
                self.bcrypt_cost
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        validate_log_format(&self.log_format)
    }

    /// Loads and validates configuration in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if required variables are missing or validation fails.
    pub fn load() -> Result<Self> {
        let config = Self::from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Prints a configuration summary. The token secret is never included.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Token TTL: {}h", self.token_ttl_hours);
        tracing::info!("  Bcrypt cost: {}", self.bcrypt_cost);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Configuration for the shortener service.
#[derive(Debug, Clone)]
pub struct ShortenerConfig {
    pub listen_addr: String,
    /// Public prefix prepended to generated codes.
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
}

impl ShortenerConfig {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            listen_addr: env::var("SHORTLINK_LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            base_url: env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:8080".to_string()),
            log_level: load_log_level(),
            log_format: load_log_format(),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the listen address or base URL is malformed, or
    /// `LOG_FORMAT` is not `text` or `json`.
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "SHORTLINK_LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        validate_log_format(&self.log_format)
    }

    /// Loads and validates configuration in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn load() -> Result<Self> {
        let config = Self::from_env();
        config.validate()?;
        Ok(config)
    }

    /// Prints a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn load_log_level() -> String {
    env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
}

fn load_log_format() -> String {
    env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string())
}

fn validate_log_format(log_format: &str) -> Result<()> {
    if log_format != "text" && log_format != "json" {
        anyhow::bail!("LOG_FORMAT must be 'text' or 'json', got '{}'", log_format);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_user_config() -> UserApiConfig {
        UserApiConfig {
            database_url: "sqlite:users.db".to_string(),
            listen_addr: "0.0.0.0:8000".to_string(),
            token_secret: "test-secret".to_string(),
            token_ttl_hours: 24,
            bcrypt_cost: 12,
            db_max_connections: 5,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    #[test]
    fn test_user_config_validation() {
        let mut config = base_user_config();
        assert!(config.validate().is_ok());

        config.database_url = "postgres://localhost/test".to_string();
        assert!(config.validate().is_err());
        config.database_url = "sqlite:users.db".to_string();

        config.listen_addr = "8000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "0.0.0.0:8000".to_string();

        config.token_secret = String::new();
        assert!(config.validate().is_err());
        config.token_secret = "test-secret".to_string();

        config.token_ttl_hours = 0;
        assert!(config.validate().is_err());
        config.token_ttl_hours = 24;

        config.bcrypt_cost = 2;
        assert!(config.validate().is_err());
        config.bcrypt_cost = 40;
        assert!(config.validate().is_err());
        config.bcrypt_cost = 12;

        config.log_format = "xml".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_shortener_config_validation() {
        let mut config = ShortenerConfig {
            listen_addr: "0.0.0.0:8080".to_string(),
            base_url: "http://localhost:8080".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        };
        assert!(config.validate().is_ok());

        config.base_url = "localhost:8080".to_string();
        assert!(config.validate().is_err());
        config.base_url = "https://sho.rt".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "8080".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_user_config_requires_token_secret() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("TOKEN_SECRET");
        }

        assert!(UserApiConfig::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_user_config_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("TOKEN_SECRET", "from-env-secret");
            env::remove_var("DATABASE_URL");
            env::remove_var("USER_API_LISTEN");
            env::remove_var("TOKEN_TTL_HOURS");
            env::remove_var("BCRYPT_COST");
        }

        let config = UserApiConfig::from_env().unwrap();

        assert_eq!(config.database_url, "sqlite:users.db");
        assert_eq!(config.listen_addr, "0.0.0.0:8000");
        assert_eq!(config.token_secret, "from-env-secret");
        assert_eq!(config.token_ttl_hours, 24);
        assert_eq!(config.bcrypt_cost, bcrypt::DEFAULT_COST);

        // Cleanup
        unsafe {
            env::remove_var("TOKEN_SECRET");
        }
    }

    #[test]
    #[serial]
    fn test_shortener_config_from_env() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("SHORTLINK_LISTEN", "127.0.0.1:9999");
            env::set_var("BASE_URL", "https://sho.rt");
        }

        let config = ShortenerConfig::from_env();

        assert_eq!(config.listen_addr, "127.0.0.1:9999");
        assert_eq!(config.base_url, "https://sho.rt");

        // Cleanup
        unsafe {
            env::remove_var("SHORTLINK_LISTEN");
            env::remove_var("BASE_URL");
        }
    }
}
