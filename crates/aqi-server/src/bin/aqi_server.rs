//! AQI chemistry backend.
//!
//! Run with: cargo run -p aqi-server
//! Configuration is read from `$AQI_CONFIG`, or `aqi.toml` in the working
//! directory; defaults apply when the file is missing.

use std::env;
use std::io::ErrorKind;

use aqi_config::{ConfigError, ServerConfig};
use aqi_server::ServerError;

const CONFIG_ENV: &str = "AQI_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "aqi.toml";

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let path = env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

    let (config, from_file) = match ServerConfig::load(&path) {
        Ok(config) => (config, true),
        Err(ConfigError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            (ServerConfig::default(), false)
        }
        Err(e) => return Err(e.into()),
    };

    aqi_console::init(&config.log_filter);
    if from_file {
        tracing::info!("loaded configuration from {}", path);
    } else {
        tracing::info!("no configuration at {}, using defaults", path);
    }

    aqi_server::serve(config).await
}
