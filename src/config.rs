//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CATEGORY_TABLES_PATH` - JSON file replacing the built-in domain/keyword tables
//! - `RATE_LIMIT_PER_SECOND` - Sustained `/classify` requests per second per client IP
//!   (default: 50, range: 1-1000)
//! - `RATE_LIMIT_BURST` - Burst size per client IP (default: 100)
//! - `MAX_BATCH_SIZE` - Maximum items in `POST /classify/batch` (default: 100, max: 1000)
//!
//! ```bash
//! export LISTEN="127.0.0.1:8000"
//! export LOG_FORMAT="json"
//! export CATEGORY_TABLES_PATH="/etc/bookmark-classifier/tables.json"
//! ```

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

use crate::domain::CategoryTables;
use crate::state::DEFAULT_MAX_BATCH_SIZE;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Replacement tables; built-in tables are used when `None`.
    pub tables_path: Option<PathBuf>,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
    pub max_batch_size: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparseable numeric values fall back to their defaults;
    /// range checks happen in [`Self::validate`].
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let tables_path = env::var("CATEGORY_TABLES_PATH")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let rate_limit_per_second = env::var("RATE_LIMIT_PER_SECOND")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(50);

        let rate_limit_burst = env::var("RATE_LIMIT_BURST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100);

        let max_batch_size = env::var("MAX_BATCH_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_BATCH_SIZE);

        Self {
            listen_addr,
            log_level,
            log_format,
            tables_path,
            rate_limit_per_second,
            rate_limit_burst,
            max_batch_size,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `rate_limit_per_second` is outside 1-1000 or `rate_limit_burst` is 0
    /// - `max_batch_size` is outside 1-1000
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.rate_limit_per_second == 0 || self.rate_limit_per_second > 1000 {
            anyhow::bail!(
                "RATE_LIMIT_PER_SECOND must be between 1 and 1000, got {}",
                self.rate_limit_per_second
            );
        }

        if self.rate_limit_burst == 0 {
            anyhow::bail!("RATE_LIMIT_BURST must be at least 1");
        }

        if self.max_batch_size == 0 || self.max_batch_size > 1000 {
            anyhow::bail!(
                "MAX_BATCH_SIZE must be between 1 and 1000, got {}",
                self.max_batch_size
            );
        }

        Ok(())
    }

    /// Loads the category tables this configuration points at.
    ///
    /// # Errors
    ///
    /// Returns an error if `CATEGORY_TABLES_PATH` is set and the file cannot be
    /// read or parsed.
    pub fn load_tables(&self) -> Result<CategoryTables> {
        match &self.tables_path {
            Some(path) => CategoryTables::from_json_file(path)
                .with_context(|| format!("Failed to load category tables from {}", path.display())),
            None => Ok(CategoryTables::builtin()),
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);

        match &self.tables_path {
            Some(path) => tracing::info!("  Category tables: {}", path.display()),
            None => tracing::info!("  Category tables: built-in"),
        }

        tracing::info!(
            "  Rate limit: {}/s (burst {})",
            self.rate_limit_per_second,
            self.rate_limit_burst
        );
        tracing::info!("  Max batch size: {}", self.max_batch_size);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 7] = [
        "LISTEN",
        "RUST_LOG",
        "LOG_FORMAT",
        "CATEGORY_TABLES_PATH",
        "RATE_LIMIT_PER_SECOND",
        "RATE_LIMIT_BURST",
        "MAX_BATCH_SIZE",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    fn valid_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:8000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            tables_path: None,
            rate_limit_per_second: 50,
            rate_limit_burst: 100,
            max_batch_size: 100,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "8000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "127.0.0.1:8000".to_string();

        config.rate_limit_per_second = 0;
        assert!(config.validate().is_err());
        config.rate_limit_per_second = 1001;
        assert!(config.validate().is_err());
        config.rate_limit_per_second = 10;

        config.rate_limit_burst = 0;
        assert!(config.validate().is_err());
        config.rate_limit_burst = 1;

        config.max_batch_size = 0;
        assert!(config.validate().is_err());
        config.max_batch_size = 1001;
        assert!(config.validate().is_err());
        config.max_batch_size = 1000;

        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "0.0.0.0:8000");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, "text");
        assert!(config.tables_path.is_none());
        assert_eq!(config.rate_limit_per_second, 50);
        assert_eq!(config.rate_limit_burst, 100);
        assert_eq!(config.max_batch_size, 100);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:9000");
            env::set_var("LOG_FORMAT", "json");
            env::set_var("CATEGORY_TABLES_PATH", "/tmp/tables.json");
            env::set_var("RATE_LIMIT_PER_SECOND", "5");
            env::set_var("MAX_BATCH_SIZE", "not-a-number");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.log_format, "json");
        assert_eq!(config.tables_path, Some(PathBuf::from("/tmp/tables.json")));
        assert_eq!(config.rate_limit_per_second, 5);
        assert_eq!(config.max_batch_size, 100);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_empty_tables_path_is_ignored() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("CATEGORY_TABLES_PATH", "");
        }

        assert!(Config::from_env().tables_path.is_none());

        clear_env();
    }

    #[test]
    fn test_load_tables_builtin() {
        let tables = valid_config().load_tables().unwrap();
        assert_eq!(tables, CategoryTables::builtin());
    }

    #[test]
    fn test_load_tables_missing_file() {
        let mut config = valid_config();
        config.tables_path = Some(PathBuf::from("/nonexistent/tables.json"));

        let err = config.load_tables().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/tables.json"));
    }
}
