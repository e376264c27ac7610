//! Configuration system for the AQI chemistry service.
//!
//! Load server configuration from TOML or YAML files to control the
//! listening address, log filter and cross-origin policy without code
//! changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use aqi_config::{CorsMode, ServerConfig};
//!
//! let config = ServerConfig::from_toml_str(r#"
//!     port = 9000
//!
//!     [cors]
//!     mode = "production"
//!     allowed_origins = ["https://aqi.example.org"]
//! "#).unwrap();
//!
//! assert_eq!(config.port, 9000);
//! assert_eq!(config.cors.mode, CorsMode::Production);
//! assert!(config.validate().is_ok());
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use aqi_config::ServerConfig;
//!
//! let config = ServerConfig::load("aqi.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Default port, matching the usual ASGI development server.
pub const DEFAULT_PORT: u16 = 8000;

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_FILTER: &str = "aqi_server=info,tower_http=info";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main server configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct ServerConfig {
    /// Address to bind the listener to.
    pub bind_address: IpAddr,

    /// Port to listen on.
    pub port: u16,

    /// Default log filter; `RUST_LOG` takes precedence when set.
    pub log_filter: String,

    /// Cross-origin policy.
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the listening port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the bind address.
    pub fn with_bind_address(mut self, address: IpAddr) -> Self {
        self.bind_address = address;
        self
    }

    /// Replaces the cross-origin policy.
    pub fn with_cors(mut self, cors: CorsConfig) -> Self {
        self.cors = cors;
        self
    }

    /// Socket address the server should listen on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }

    /// Checks settings that parse fine but cannot be served.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for port 0, or for production mode
    /// without any allowed origin.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Invalid("port must be non-zero".to_string()));
        }
        self.cors.validate()
    }
}

/// Cross-origin posture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CorsMode {
    /// Any origin, method and header. Meant for local frontends.
    #[default]
    Development,

    /// Only the configured origins.
    Production,
}

impl std::fmt::Display for CorsMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorsMode::Development => f.write_str("development"),
            CorsMode::Production => f.write_str("production"),
        }
    }
}

/// Cross-origin configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct CorsConfig {
    pub mode: CorsMode,

    /// Origins allowed in production mode, e.g. `https://aqi.example.org`.
    pub allowed_origins: Vec<String>,

    /// Whether browsers may send credentials.
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            mode: CorsMode::Development,
            allowed_origins: Vec::new(),
            allow_credentials: true,
        }
    }
}

impl CorsConfig {
    /// Production policy restricted to `origins`.
    pub fn production<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mode: CorsMode::Production,
            allowed_origins: origins.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.mode == CorsMode::Production && self.allowed_origins.is_empty() {
            return Err(ConfigError::Invalid(
                "production CORS mode requires at least one allowed origin".to_string(),
            ));
        }
        Ok(())
    }
}
