//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::gateway::GatewayConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("bankdash/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl From<&ApiConfig> for GatewayConfig {
    fn from(api: &ApiConfig) -> Self {
        GatewayConfig {
            base_url: api.base_url.clone(),
            request_timeout_ms: api.request_timeout_secs.saturating_mul(1000),
            user_agent: api.user_agent.clone(),
        }
    }
}

/// Where the bearer token comes from
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Environment variable holding the session token
    #[serde(default = "default_token_env_var")]
    pub token_env_var: String,
}

fn default_token_env_var() -> String {
    "BANKDASH_TOKEN".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_env_var: default_token_env_var(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let (config, source) = Self::discover(&default_paths());
        source.log();
        config
    }

    /// Load an explicit file, or fall back to the default locations.
    ///
    /// Nothing is logged here; the returned [`ConfigSource`] reports where
    /// the configuration came from once logging is set up.
    pub fn resolve(explicit: Option<&Path>) -> Result<(Self, ConfigSource), ConfigError> {
        match explicit {
            Some(path) => {
                let config = Self::load_with_env(path)?;
                let source = ConfigSource {
                    loaded_from: Some(path.to_path_buf()),
                    skipped: Vec::new(),
                };
                Ok((config, source))
            }
            None => Ok(Self::discover(&default_paths())),
        }
    }

    /// First candidate that exists and parses wins
    fn discover(candidates: &[PathBuf]) -> (Self, ConfigSource) {
        let mut skipped = Vec::new();

        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    let source = ConfigSource {
                        loaded_from: Some(path.clone()),
                        skipped,
                    };
                    return (config, source);
                }
                Err(e) => skipped.push((path.clone(), e)),
            }
        }

        let source = ConfigSource {
            loaded_from: None,
            skipped,
        };
        (Self::from_env(), source)
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides<F: Fn(&str) -> Option<String>>(&mut self, lookup: F) {
        // API overrides
        if let Some(url) = lookup("BANKDASH_API_URL") {
            self.api.base_url = url;
        }
        if let Some(timeout) = lookup("BANKDASH_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => self.api.request_timeout_secs = secs,
                Err(_) => tracing::warn!("Ignoring invalid BANKDASH_TIMEOUT_SECS: {}", timeout),
            }
        }

        // Session overrides
        if let Some(var) = lookup("BANKDASH_TOKEN_VAR") {
            self.session.token_env_var = var;
        }

        // Logging overrides
        if let Some(level) = lookup("BANKDASH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("BANKDASH_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

fn default_paths() -> Vec<PathBuf> {
    [
        dirs::config_dir().map(|p| p.join("bankdash").join("config.toml")),
        Some(PathBuf::from("/etc/bankdash/config.toml")),
        Some(PathBuf::from("./config.toml")),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Where a loaded configuration came from
#[derive(Debug)]
pub struct ConfigSource {
    /// File the configuration was read from; `None` means defaults plus
    /// environment overrides
    pub loaded_from: Option<PathBuf>,
    /// Files that exist but failed to load
    pub skipped: Vec<(PathBuf, ConfigError)>,
}

impl ConfigSource {
    pub fn log(&self) {
        for (path, e) in &self.skipped {
            tracing::warn!("Failed to load config from {:?}: {}", path, e);
        }
        match &self.loaded_from {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::debug!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# bankdash Configuration
#
# Environment variables override these settings:
# - BANKDASH_API_URL
# - BANKDASH_TIMEOUT_SECS
# - BANKDASH_TOKEN_VAR
# - BANKDASH_LOG_LEVEL
# - BANKDASH_LOG_FORMAT

[api]
# Dashboard backend base URL
base_url = "http://localhost:5000"

# Request timeout in seconds
request_timeout_secs = 30

[session]
# Environment variable holding the session bearer token
token_env_var = "BANKDASH_TOKEN"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
