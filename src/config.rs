//! Configuration module for loading settings from the environment and an
//! optional TOML file.

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Environment variable holding the PostgreSQL connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
/// Environment variable holding the listen port.
pub const PORT_VAR: &str = "PORT";
/// Environment variable holding the listen address.
pub const HOST_VAR: &str = "HOST";
/// Environment variable holding the template directory.
pub const TEMPLATE_DIR_VAR: &str = "TEMPLATE_DIR";
/// Environment variable pointing at an optional TOML configuration file.
pub const CONFIG_PATH_VAR: &str = "CONFIG_PATH";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_TEMPLATE_DIR: &str = "templates";

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse TOML configuration.
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A required setting was not provided.
    #[error("{0} is not set")]
    Missing(&'static str),
    /// Invalid configuration value.
    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Template configuration.
    #[serde(default)]
    pub templates: TemplateConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Database configuration.
#[derive(Clone, Default, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection string.
    #[serde(default)]
    pub url: String,
}

// The connection string carries credentials.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"<redacted>")
            .finish()
    }
}

/// Template configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateConfig {
    /// Directory containing the `.html` templates.
    #[serde(default = "default_template_dir")]
    pub dir: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            dir: default_template_dir(),
        }
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_template_dir() -> String {
    DEFAULT_TEMPLATE_DIR.to_string()
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// The result is not validated; environment overrides may still fill in
    /// missing values.
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    /// Returns error if content cannot be parsed.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Builds the configuration from the process environment.
    ///
    /// # Errors
    /// Returns error if `DATABASE_URL` is missing, a value is malformed, or
    /// the file named by `CONFIG_PATH` cannot be loaded.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration using `lookup` to resolve variables.
    ///
    /// Empty values count as absent.
    ///
    /// # Errors
    /// See [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut config = match get(CONFIG_PATH_VAR) {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(url) = get(DATABASE_URL_VAR) {
            config.database.url = url;
        }
        if let Some(host) = get(HOST_VAR) {
            config.server.host = host;
        }
        if let Some(port) = get(PORT_VAR) {
            config.server.port = port.trim().parse().map_err(|_| {
                ConfigError::InvalidValue(format!("{PORT_VAR} must be a valid port, got {port:?}"))
            })?;
        }
        if let Some(dir) = get(TEMPLATE_DIR_VAR) {
            config.templates.dir = dir;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    /// Returns error if a required value is missing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Missing(DATABASE_URL_VAR));
        }
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "server host cannot be empty".to_string(),
            ));
        }
        if self.templates.dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "template directory cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Socket address the HTTP server binds to.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
